use std::sync::Mutex;

use atelier_core::{DomainError, DomainResult};

use crate::operator::Operator;

/// Storage contract for operators.
///
/// A repository instance is owned by whoever constructs the registration
/// service and passed in explicitly; its lifetime ends with its owner's.
pub trait OperatorRepository: Send + Sync {
    /// Insert a new operator.
    ///
    /// Fails with `InvalidState` when the email is already registered.
    fn insert(&self, operator: Operator) -> DomainResult<()>;

    fn find_by_email(&self, email: &str) -> Option<Operator>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory repository for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryOperatorRepository {
    operators: Mutex<Vec<Operator>>,
}

impl InMemoryOperatorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperatorRepository for InMemoryOperatorRepository {
    fn insert(&self, operator: Operator) -> DomainResult<()> {
        let mut operators = self.operators.lock().unwrap();

        if operators.iter().any(|o| o.email() == operator.email()) {
            return Err(DomainError::invalid_state("email is already registered"));
        }

        operators.push(operator);
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Option<Operator> {
        let needle = email.trim().to_lowercase();
        self.operators
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.email() == needle)
            .cloned()
    }

    fn len(&self) -> usize {
        self.operators.lock().unwrap().len()
    }
}
