use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use atelier_core::{DomainError, DomainResult, Entity, OperatorId};

/// Workshop operator (registered staff member).
///
/// Construction is the validation boundary: an `Operator` that exists has a
/// well-formed, normalized email and a non-blank display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    id: OperatorId,
    email: String,
    display_name: String,
    registered_at: DateTime<Utc>,
}

impl Operator {
    pub fn new(
        id: OperatorId,
        email: &str,
        display_name: &str,
        registered_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::invalid_argument("invalid email format"));
        }

        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(DomainError::invalid_argument(
                "display name cannot be blank",
            ));
        }

        Ok(Self {
            id,
            email,
            display_name: display_name.to_string(),
            registered_at,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

impl Entity for Operator {
    type Id = OperatorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
