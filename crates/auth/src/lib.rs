//! `forgehr-auth` — actor identity and the access scope resolver.
//!
//! This crate is intentionally decoupled from HTTP and storage: the
//! [`Actor`] descriptor is supplied by an external identity provider, and
//! scope resolution is a pure function from (actor, entity type) to a
//! row-level predicate. No ambient current-actor state exists anywhere;
//! every core operation takes the actor explicitly.

pub mod actor;
pub mod roles;
pub mod scope;

pub use actor::Actor;
pub use roles::Role;
pub use scope::{EmployeeScope, ReviewScope, Scope};
