//! `forgehr-org` — organizational records of the HR domain.
//!
//! Companies own departments, employees, and projects. Records here are
//! plain data: every policy decision (who may see or mutate what) lives in
//! the scope/guard layers, and cross-entity invariants are centralized in
//! [`validate`] so create and update flows share one implementation.

pub mod company;
pub mod department;
pub mod employee;
pub mod project;
pub mod validate;

pub use company::{Company, CompanyPatch};
pub use department::{Department, DepartmentPatch};
pub use employee::{Employee, EmployeePatch};
pub use project::{Project, ProjectPatch};
