//! `forgehr-reviews` — the employee review approval lifecycle.
//!
//! The lifecycle is a finite state machine with one central transition
//! table ([`ReviewStage::next`]); review operations consult the table
//! first and only mutate the record after the transition is accepted, so
//! a rejected operation never leaves a partial write behind.

pub mod review;
pub mod stage;

pub use review::{EmployeeReview, ReviewAction};
pub use stage::{InvalidTransition, ReviewOp, ReviewStage};
