use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_core::CustomerId;

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A placed customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    total_minor: i64,
    placed_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(
        id: OrderId,
        customer_id: CustomerId,
        total_minor: i64,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_id,
            total_minor,
            placed_at,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Order total in minor currency units. Always positive.
    pub fn total_minor(&self) -> i64 {
        self.total_minor
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}
