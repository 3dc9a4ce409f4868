//! `forgehr-guard` — the authorization guard for mutating actions.
//!
//! Every create/update/delete/transition passes through a function in this
//! crate before it reaches the store or the review state machine. Checks
//! are pure (no IO, no panics): callers resolve the referenced records and
//! hand them in. A denial carries a human-readable reason and never
//! silently filters; the caller rejects the whole action.
//!
//! Role dispatch is an exhaustive `match` on the closed [`Role`] enum.
//!
//! [`Role`]: forgehr_auth::Role

pub mod employees;
pub mod org_admin;
pub mod projects;
pub mod reviews;

use thiserror::Error;

use forgehr_auth::Actor;
use forgehr_core::CompanyId;

/// The actor/action/target combination is disallowed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("permission denied: {0}")]
pub struct AccessDenied(pub String);

impl AccessDenied {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

/// The tenant a Manager acts within; denies when the membership is absent.
pub(crate) fn manager_tenant(actor: &Actor) -> Result<CompanyId, AccessDenied> {
    actor
        .company
        .ok_or_else(|| AccessDenied::new("manager has no company membership"))
}
