//! The unified error surface of the core.

use thiserror::Error;

use forgehr_core::DomainError;
use forgehr_guard::AccessDenied;
use forgehr_reviews::InvalidTransition;
use forgehr_store::StoreError;

pub type HrResult<T> = Result<T, HrError>;

/// Everything an operation can fail with.
///
/// All variants are deterministic outcomes of current state and actor and
/// are never retried internally, except `StoreUnavailable`, which carries
/// a transient store-layer fault through unmodified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HrError {
    /// The review is not in the stage the operation requires.
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),

    /// The actor/action/target combination is disallowed.
    #[error(transparent)]
    PermissionDenied(#[from] AccessDenied),

    /// A cross-entity invariant or field constraint was violated.
    #[error("validation failed on '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// Absent from the store, or absent from the actor's visible scope;
    /// the two are indistinguishable by design.
    #[error("not found")]
    NotFound,

    /// A concurrent writer got there first (review transitions).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Transient store failure, propagated unmodified.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<DomainError> for HrError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { field, reason } => HrError::Validation { field, reason },
            DomainError::InvalidId(msg) => HrError::Validation {
                field: "id".to_string(),
                reason: msg,
            },
            DomainError::NotFound => HrError::NotFound,
        }
    }
}

impl From<StoreError> for HrError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => HrError::StoreUnavailable(msg),
            StoreError::VersionConflict { .. } | StoreError::DuplicateId(_) => {
                HrError::Conflict(err.to_string())
            }
        }
    }
}

impl HrError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
