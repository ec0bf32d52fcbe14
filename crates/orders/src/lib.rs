//! Customer orders: placement through injected collaborators.
//!
//! The order service coordinates one payment charge and one notification per
//! placed order. Both collaborators are narrow, single-capability contracts
//! supplied at construction; any failure they raise propagates to the
//! service's caller unchanged.

pub mod notifier;
pub mod order;
pub mod payment;
pub mod service;

pub use notifier::OrderNotifier;
pub use order::{Order, OrderId};
pub use payment::{PaymentGateway, PaymentReceipt};
pub use service::{OrderService, PlacedOrder};
