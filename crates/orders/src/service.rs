use chrono::{DateTime, Utc};

use atelier_core::{CustomerId, DomainError, DomainResult};

use crate::notifier::OrderNotifier;
use crate::order::{Order, OrderId};
use crate::payment::{PaymentGateway, PaymentReceipt};

/// A successfully placed order together with its charge receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order: Order,
    pub receipt: PaymentReceipt,
}

/// Order placement orchestration.
///
/// Both collaborators are supplied at construction and held, immutable, for
/// the service's lifetime. The service never constructs a gateway or
/// notifier itself.
pub struct OrderService<P, N> {
    gateway: P,
    notifier: N,
}

impl<P, N> OrderService<P, N>
where
    P: PaymentGateway,
    N: OrderNotifier,
{
    pub fn new(gateway: P, notifier: N) -> Self {
        Self { gateway, notifier }
    }

    /// Place an order for a customer.
    ///
    /// Validates the total locally, then delegates exactly once to the
    /// gateway and exactly once to the notifier, in that order. Any
    /// collaborator failure propagates unchanged; a failed charge means the
    /// notifier is never invoked.
    pub fn place_order(
        &self,
        customer_id: CustomerId,
        total_minor: i64,
        now: DateTime<Utc>,
    ) -> DomainResult<PlacedOrder> {
        if total_minor <= 0 {
            return Err(DomainError::invalid_argument(
                "order total must be positive",
            ));
        }

        let order = Order::new(OrderId::new(), customer_id, total_minor, now);

        let receipt = self.gateway.charge(customer_id, total_minor)?;
        self.notifier.order_placed(&order)?;

        tracing::info!(order_id = %order.id(), total_minor, "order placed");
        Ok(PlacedOrder { order, receipt })
    }
}
