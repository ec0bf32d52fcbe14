use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_core::{CustomerId, DomainResult, ValueObject};

/// Proof of a successful charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Gateway-side reference for reconciliation.
    pub reference: Uuid,
    pub amount_minor: i64,
    pub charged_at: DateTime<Utc>,
}

impl ValueObject for PaymentReceipt {}

/// Payment capability: charge a customer once.
///
/// Implementations decide how the charge happens; callers hold the contract,
/// never a concrete provider. A failed charge is reported through the error,
/// not retried here.
pub trait PaymentGateway: Send + Sync {
    fn charge(&self, customer_id: CustomerId, amount_minor: i64) -> DomainResult<PaymentReceipt>;
}

impl<G> PaymentGateway for std::sync::Arc<G>
where
    G: PaymentGateway + ?Sized,
{
    fn charge(&self, customer_id: CustomerId, amount_minor: i64) -> DomainResult<PaymentReceipt> {
        (**self).charge(customer_id, amount_minor)
    }
}
