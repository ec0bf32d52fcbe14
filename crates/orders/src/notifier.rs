use atelier_core::DomainResult;

use crate::order::Order;

/// Notification capability: tell someone an order was placed.
pub trait OrderNotifier: Send + Sync {
    fn order_placed(&self, order: &Order) -> DomainResult<()>;
}

impl<N> OrderNotifier for std::sync::Arc<N>
where
    N: OrderNotifier + ?Sized,
{
    fn order_placed(&self, order: &Order) -> DomainResult<()> {
        (**self).order_placed(order)
    }
}
