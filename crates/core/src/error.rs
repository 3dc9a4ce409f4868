//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, lookups). Permission decisions and storage concerns carry
/// their own error types closer to where they are made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A cross-entity invariant or field constraint was violated.
    ///
    /// `field` names the offending field or id so callers can report it.
    #[error("validation failed on '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found (domain-level).
    ///
    /// Deliberately carries no detail: "absent" and "not visible to this
    /// actor" must stay indistinguishable.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
