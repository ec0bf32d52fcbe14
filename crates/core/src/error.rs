//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// There are exactly two failure kinds, both deterministic and both raised
/// synchronously at the point of violation:
///
/// - [`DomainError::InvalidArgument`]: a supplied parameter violates a
///   precondition (negative amount, blank model string, malformed email).
/// - [`DomainError::InvalidState`]: applying an otherwise well-formed
///   operation would push an entity out of its invariant (overdraft,
///   starting an engine that is already running).
///
/// Neither kind is retried internally; handling them is the caller's
/// responsibility. Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A supplied parameter violates a precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation would violate an entity invariant.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
