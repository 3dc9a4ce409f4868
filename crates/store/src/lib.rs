//! `forgehr-store` — the tenant store boundary.
//!
//! Pure data access, no policy: scoping and authorization happen before a
//! call ever reaches a store. The trait models a relational store with
//! simple CRUD plus the referential semantics the schema would carry
//! (cascade on company delete, review versioning for linearized
//! transitions). In-memory implementations back tests and development.

pub mod directory;
pub mod hr_store;
pub mod in_memory;

pub use directory::{ActorDirectory, InMemoryActorDirectory};
pub use hr_store::{HrStore, StoreError, StoreResult, VersionedReview};
pub use in_memory::InMemoryHrStore;
