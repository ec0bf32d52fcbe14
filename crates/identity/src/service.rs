use chrono::{DateTime, Utc};

use atelier_core::{DomainResult, Entity, OperatorId};

use crate::operator::Operator;
use crate::repository::OperatorRepository;

/// Registration orchestration.
///
/// The repository is supplied once at construction and held for the
/// service's lifetime; the service never constructs its own collaborators.
pub struct RegistrationService<R> {
    repository: R,
}

impl<R> RegistrationService<R>
where
    R: OperatorRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Register a new operator.
    ///
    /// Validates locally (via the `Operator` constructor), then delegates
    /// exactly once to the repository. A repository failure propagates
    /// unchanged to the caller.
    pub fn register(
        &self,
        email: &str,
        display_name: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<Operator> {
        let operator = Operator::new(OperatorId::new(), email, display_name, now)?;
        self.repository.insert(operator.clone())?;

        tracing::info!(operator_id = %operator.id(), "operator registered");
        Ok(operator)
    }
}
