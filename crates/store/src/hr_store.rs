use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use forgehr_core::{CompanyId, DepartmentId, EmployeeId, ProjectId, ReviewId};
use forgehr_org::{Company, Department, Employee, Project};
use forgehr_reviews::EmployeeReview;

/// Store operation error.
///
/// These are infrastructure failures, distinct from domain and permission
/// errors. `VersionConflict` is the optimistic concurrency signal the
/// service relies on to linearize review transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Transient store failure (connectivity, poisoned lock, timeout).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A write raced another writer past the same version.
    #[error("version conflict on review {review}: expected {expected}, found {found}")]
    VersionConflict {
        review: ReviewId,
        expected: u64,
        found: u64,
    },

    /// An insert reused an existing identifier.
    #[error("duplicate id: {0}")]
    DuplicateId(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A review together with its store version.
///
/// The version increments on every committed write; a transition must be
/// written back with the version it was read at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedReview {
    pub review: EmployeeReview,
    pub version: u64,
}

/// Relational-style store for the HR domain.
///
/// Listing methods return full sets; the service applies scope predicates.
/// `update_*`/`delete_*` report whether the record existed. Implementations
/// must provide:
/// - cascade on `delete_company` (departments, employees, projects,
///   reviews of the company all go);
/// - cascade on `delete_employee` (the employee's reviews go, and the
///   employee leaves every project assignment);
/// - read-modify-write atomicity per review via the version check in
///   `update_review`.
pub trait HrStore: Send + Sync {
    fn insert_company(&self, company: Company) -> StoreResult<()>;
    fn company(&self, id: CompanyId) -> StoreResult<Option<Company>>;
    fn companies(&self) -> StoreResult<Vec<Company>>;
    fn update_company(&self, company: Company) -> StoreResult<bool>;
    fn delete_company(&self, id: CompanyId) -> StoreResult<bool>;

    fn insert_department(&self, department: Department) -> StoreResult<()>;
    fn department(&self, id: DepartmentId) -> StoreResult<Option<Department>>;
    fn departments(&self) -> StoreResult<Vec<Department>>;
    fn update_department(&self, department: Department) -> StoreResult<bool>;
    fn delete_department(&self, id: DepartmentId) -> StoreResult<bool>;

    fn insert_employee(&self, employee: Employee) -> StoreResult<()>;
    fn employee(&self, id: EmployeeId) -> StoreResult<Option<Employee>>;
    fn employees(&self) -> StoreResult<Vec<Employee>>;
    fn update_employee(&self, employee: Employee) -> StoreResult<bool>;
    fn delete_employee(&self, id: EmployeeId) -> StoreResult<bool>;

    fn insert_project(&self, project: Project) -> StoreResult<()>;
    fn project(&self, id: ProjectId) -> StoreResult<Option<Project>>;
    fn projects(&self) -> StoreResult<Vec<Project>>;
    fn update_project(&self, project: Project) -> StoreResult<bool>;
    fn delete_project(&self, id: ProjectId) -> StoreResult<bool>;

    fn insert_review(&self, review: EmployeeReview) -> StoreResult<()>;
    fn review(&self, id: ReviewId) -> StoreResult<Option<VersionedReview>>;
    fn reviews(&self) -> StoreResult<Vec<EmployeeReview>>;

    /// Commit a review mutation read at `expected_version`.
    ///
    /// Fails with [`StoreError::VersionConflict`] when another writer got
    /// there first; returns the new version on success, `Ok(None)` when
    /// the review no longer exists.
    fn update_review(
        &self,
        review: EmployeeReview,
        expected_version: u64,
    ) -> StoreResult<Option<u64>>;
}

impl<S> HrStore for Arc<S>
where
    S: HrStore + ?Sized,
{
    fn insert_company(&self, company: Company) -> StoreResult<()> {
        (**self).insert_company(company)
    }
    fn company(&self, id: CompanyId) -> StoreResult<Option<Company>> {
        (**self).company(id)
    }
    fn companies(&self) -> StoreResult<Vec<Company>> {
        (**self).companies()
    }
    fn update_company(&self, company: Company) -> StoreResult<bool> {
        (**self).update_company(company)
    }
    fn delete_company(&self, id: CompanyId) -> StoreResult<bool> {
        (**self).delete_company(id)
    }

    fn insert_department(&self, department: Department) -> StoreResult<()> {
        (**self).insert_department(department)
    }
    fn department(&self, id: DepartmentId) -> StoreResult<Option<Department>> {
        (**self).department(id)
    }
    fn departments(&self) -> StoreResult<Vec<Department>> {
        (**self).departments()
    }
    fn update_department(&self, department: Department) -> StoreResult<bool> {
        (**self).update_department(department)
    }
    fn delete_department(&self, id: DepartmentId) -> StoreResult<bool> {
        (**self).delete_department(id)
    }

    fn insert_employee(&self, employee: Employee) -> StoreResult<()> {
        (**self).insert_employee(employee)
    }
    fn employee(&self, id: EmployeeId) -> StoreResult<Option<Employee>> {
        (**self).employee(id)
    }
    fn employees(&self) -> StoreResult<Vec<Employee>> {
        (**self).employees()
    }
    fn update_employee(&self, employee: Employee) -> StoreResult<bool> {
        (**self).update_employee(employee)
    }
    fn delete_employee(&self, id: EmployeeId) -> StoreResult<bool> {
        (**self).delete_employee(id)
    }

    fn insert_project(&self, project: Project) -> StoreResult<()> {
        (**self).insert_project(project)
    }
    fn project(&self, id: ProjectId) -> StoreResult<Option<Project>> {
        (**self).project(id)
    }
    fn projects(&self) -> StoreResult<Vec<Project>> {
        (**self).projects()
    }
    fn update_project(&self, project: Project) -> StoreResult<bool> {
        (**self).update_project(project)
    }
    fn delete_project(&self, id: ProjectId) -> StoreResult<bool> {
        (**self).delete_project(id)
    }

    fn insert_review(&self, review: EmployeeReview) -> StoreResult<()> {
        (**self).insert_review(review)
    }
    fn review(&self, id: ReviewId) -> StoreResult<Option<VersionedReview>> {
        (**self).review(id)
    }
    fn reviews(&self) -> StoreResult<Vec<EmployeeReview>> {
        (**self).reviews()
    }
    fn update_review(
        &self,
        review: EmployeeReview,
        expected_version: u64,
    ) -> StoreResult<Option<u64>> {
        (**self).update_review(review, expected_version)
    }
}
