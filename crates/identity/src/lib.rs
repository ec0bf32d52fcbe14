//! Operator identity: registration against an injected repository.
//!
//! The repository is an explicit collaborator owned by whoever constructs
//! the registration service. There is no process-wide operator collection.

pub mod operator;
pub mod repository;
pub mod service;

pub use operator::Operator;
pub use repository::{InMemoryOperatorRepository, OperatorRepository};
pub use service::RegistrationService;
