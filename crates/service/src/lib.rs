//! `forgehr-service` — the caller-facing operation set.
//!
//! Each operation takes the acting [`Actor`] explicitly and runs the same
//! pipeline: scope (reads) or guard (mutations), then centralized
//! validation, then the store write. Every check executes before any
//! mutation, so a failed operation leaves all records unchanged and a
//! repeated denial yields the same denial.
//!
//! The transport layer above this crate owns response envelopes,
//! pagination, and status mapping; none of that appears here.

pub mod companies;
pub mod departments;
pub mod employees;
pub mod error;
pub mod projects;
pub mod reviews;


pub use companies::CompanySummary;
pub use employees::NewEmployee;
pub use error::{HrError, HrResult};
pub use projects::NewProject;

use forgehr_auth::Actor;
use forgehr_guard::AccessDenied;
use forgehr_store::{ActorDirectory, HrStore};

/// The HR core service.
///
/// Generic over the tenant store and the identity directory so tests run
/// against the in-memory implementations and production can plug in a
/// relational store.
#[derive(Debug, Clone)]
pub struct HrService<S, D> {
    store: S,
    directory: D,
}

impl<S, D> HrService<S, D>
where
    S: HrStore,
    D: ActorDirectory,
{
    pub fn new(store: S, directory: D) -> Self {
        Self { store, directory }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Log and convert a guard denial.
pub(crate) fn denied(actor: &Actor, action: &str, err: AccessDenied) -> HrError {
    tracing::warn!(
        actor = %actor.id,
        role = %actor.role,
        action,
        reason = err.reason(),
        "action denied"
    );
    HrError::PermissionDenied(err)
}
