use std::collections::HashMap;
use std::sync::RwLock;

use forgehr_core::{CompanyId, DepartmentId, EmployeeId, ProjectId, ReviewId};
use forgehr_org::{Company, Department, Employee, Project};
use forgehr_reviews::EmployeeReview;

use crate::hr_store::{HrStore, StoreError, StoreResult, VersionedReview};

#[derive(Debug, Default)]
struct State {
    companies: HashMap<CompanyId, Company>,
    departments: HashMap<DepartmentId, Department>,
    employees: HashMap<EmployeeId, Employee>,
    projects: HashMap<ProjectId, Project>,
    reviews: HashMap<ReviewId, VersionedReview>,
}

/// In-memory relational store for tests/dev.
///
/// A single lock over the whole state keeps the cascade paths atomic.
/// Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryHrStore {
    state: RwLock<State>,
}

impl InMemoryHrStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, State>> {
        self.state
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, State>> {
        self.state
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

fn insert_new<K, V>(map: &mut HashMap<K, V>, key: K, value: V) -> StoreResult<()>
where
    K: std::hash::Hash + Eq + core::fmt::Display + Copy,
{
    if map.contains_key(&key) {
        return Err(StoreError::DuplicateId(key.to_string()));
    }
    map.insert(key, value);
    Ok(())
}

impl HrStore for InMemoryHrStore {
    fn insert_company(&self, company: Company) -> StoreResult<()> {
        let mut state = self.write()?;
        insert_new(&mut state.companies, company.id, company)
    }

    fn company(&self, id: CompanyId) -> StoreResult<Option<Company>> {
        Ok(self.read()?.companies.get(&id).cloned())
    }

    fn companies(&self) -> StoreResult<Vec<Company>> {
        Ok(self.read()?.companies.values().cloned().collect())
    }

    fn update_company(&self, company: Company) -> StoreResult<bool> {
        let mut state = self.write()?;
        match state.companies.get_mut(&company.id) {
            Some(slot) => {
                *slot = company;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_company(&self, id: CompanyId) -> StoreResult<bool> {
        let mut state = self.write()?;
        if state.companies.remove(&id).is_none() {
            return Ok(false);
        }
        // Relational cascade: everything owned by the company goes with it.
        state.departments.retain(|_, d| d.company != id);
        let gone: Vec<EmployeeId> = state
            .employees
            .values()
            .filter(|e| e.company == id)
            .map(|e| e.id)
            .collect();
        state.employees.retain(|_, e| e.company != id);
        state.projects.retain(|_, p| p.company != id);
        state
            .reviews
            .retain(|_, r| !gone.contains(&r.review.employee));
        Ok(true)
    }

    fn insert_department(&self, department: Department) -> StoreResult<()> {
        let mut state = self.write()?;
        insert_new(&mut state.departments, department.id, department)
    }

    fn department(&self, id: DepartmentId) -> StoreResult<Option<Department>> {
        Ok(self.read()?.departments.get(&id).cloned())
    }

    fn departments(&self) -> StoreResult<Vec<Department>> {
        Ok(self.read()?.departments.values().cloned().collect())
    }

    fn update_department(&self, department: Department) -> StoreResult<bool> {
        let mut state = self.write()?;
        match state.departments.get_mut(&department.id) {
            Some(slot) => {
                *slot = department;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_department(&self, id: DepartmentId) -> StoreResult<bool> {
        Ok(self.write()?.departments.remove(&id).is_some())
    }

    fn insert_employee(&self, employee: Employee) -> StoreResult<()> {
        let mut state = self.write()?;
        insert_new(&mut state.employees, employee.id, employee)
    }

    fn employee(&self, id: EmployeeId) -> StoreResult<Option<Employee>> {
        Ok(self.read()?.employees.get(&id).cloned())
    }

    fn employees(&self) -> StoreResult<Vec<Employee>> {
        Ok(self.read()?.employees.values().cloned().collect())
    }

    fn update_employee(&self, employee: Employee) -> StoreResult<bool> {
        let mut state = self.write()?;
        match state.employees.get_mut(&employee.id) {
            Some(slot) => {
                *slot = employee;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_employee(&self, id: EmployeeId) -> StoreResult<bool> {
        let mut state = self.write()?;
        if state.employees.remove(&id).is_none() {
            return Ok(false);
        }
        // Cascade: the employee's reviews go, and the employee leaves every
        // project assignment (many-to-many cleanup).
        state.reviews.retain(|_, r| r.review.employee != id);
        for project in state.projects.values_mut() {
            project.assigned_employees.retain(|e| *e != id);
        }
        Ok(true)
    }

    fn insert_project(&self, project: Project) -> StoreResult<()> {
        let mut state = self.write()?;
        insert_new(&mut state.projects, project.id, project)
    }

    fn project(&self, id: ProjectId) -> StoreResult<Option<Project>> {
        Ok(self.read()?.projects.get(&id).cloned())
    }

    fn projects(&self) -> StoreResult<Vec<Project>> {
        Ok(self.read()?.projects.values().cloned().collect())
    }

    fn update_project(&self, project: Project) -> StoreResult<bool> {
        let mut state = self.write()?;
        match state.projects.get_mut(&project.id) {
            Some(slot) => {
                *slot = project;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_project(&self, id: ProjectId) -> StoreResult<bool> {
        Ok(self.write()?.projects.remove(&id).is_some())
    }

    fn insert_review(&self, review: EmployeeReview) -> StoreResult<()> {
        let mut state = self.write()?;
        insert_new(
            &mut state.reviews,
            review.id,
            VersionedReview { review, version: 1 },
        )
    }

    fn review(&self, id: ReviewId) -> StoreResult<Option<VersionedReview>> {
        Ok(self.read()?.reviews.get(&id).cloned())
    }

    fn reviews(&self) -> StoreResult<Vec<EmployeeReview>> {
        Ok(self
            .read()?
            .reviews
            .values()
            .map(|v| v.review.clone())
            .collect())
    }

    fn update_review(
        &self,
        review: EmployeeReview,
        expected_version: u64,
    ) -> StoreResult<Option<u64>> {
        let mut state = self.write()?;
        let Some(slot) = state.reviews.get_mut(&review.id) else {
            return Ok(None);
        };
        if slot.version != expected_version {
            return Err(StoreError::VersionConflict {
                review: review.id,
                expected: expected_version,
                found: slot.version,
            });
        }
        slot.review = review;
        slot.version += 1;
        Ok(Some(slot.version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use forgehr_core::ActorId;
    use forgehr_reviews::{ReviewAction, ReviewStage};

    fn company(store: &InMemoryHrStore) -> Company {
        let c = Company::new(CompanyId::new(), "Acme", Utc::now());
        store.insert_company(c.clone()).unwrap();
        c
    }

    fn employee(store: &InMemoryHrStore, company: CompanyId) -> Employee {
        let now = Utc::now();
        let e = Employee {
            id: EmployeeId::new(),
            company,
            department: DepartmentId::new(),
            linked_actor: None,
            name: "Sam".to_string(),
            email: format!("{}@acme.test", EmployeeId::new()),
            mobile: String::new(),
            address: String::new(),
            designation: "Engineer".to_string(),
            hired_on: None,
            created_at: now,
            updated_at: now,
        };
        store.insert_employee(e.clone()).unwrap();
        e
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let store = InMemoryHrStore::new();
        let c = company(&store);
        let err = store.insert_company(c).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(_)));
    }

    #[test]
    fn company_delete_cascades_to_everything_it_owns() {
        let store = InMemoryHrStore::new();
        let c = company(&store);
        let d = Department::new(DepartmentId::new(), c.id, "Ops", Utc::now());
        store.insert_department(d.clone()).unwrap();
        let e = employee(&store, c.id);
        store
            .insert_review(EmployeeReview::new(ReviewId::new(), e.id, Utc::now()))
            .unwrap();

        let other = company(&store);
        let survivor = employee(&store, other.id);

        assert!(store.delete_company(c.id).unwrap());
        assert!(store.department(d.id).unwrap().is_none());
        assert!(store.employee(e.id).unwrap().is_none());
        assert!(store.reviews().unwrap().is_empty());
        assert!(store.employee(survivor.id).unwrap().is_some());
    }

    #[test]
    fn employee_delete_cascades_reviews_and_assignments() {
        let store = InMemoryHrStore::new();
        let c = company(&store);
        let e = employee(&store, c.id);
        let now = Utc::now();
        let p = Project {
            id: ProjectId::new(),
            company: c.id,
            department: DepartmentId::new(),
            name: "Rollout".to_string(),
            description: String::new(),
            start_date: now.date_naive(),
            end_date: now.date_naive(),
            assigned_employees: vec![e.id],
            created_at: now,
            updated_at: now,
        };
        store.insert_project(p.clone()).unwrap();
        store
            .insert_review(EmployeeReview::new(ReviewId::new(), e.id, now))
            .unwrap();

        assert!(store.delete_employee(e.id).unwrap());
        assert!(store.reviews().unwrap().is_empty());
        assert!(store
            .project(p.id)
            .unwrap()
            .unwrap()
            .assigned_employees
            .is_empty());
    }

    #[test]
    fn review_version_check_rejects_the_second_writer() {
        let store = InMemoryHrStore::new();
        let c = company(&store);
        let e = employee(&store, c.id);
        let review = EmployeeReview::new(ReviewId::new(), e.id, Utc::now());
        store.insert_review(review.clone()).unwrap();

        // Two actors read the same version.
        let first = store.review(review.id).unwrap().unwrap();
        let second = store.review(review.id).unwrap().unwrap();
        assert_eq!(first.version, second.version);

        let mut r1 = first.review.clone();
        r1.transition(
            ReviewAction::Schedule {
                date: Utc::now(),
                actor: ActorId::new(),
            },
            Utc::now(),
        )
        .unwrap();
        let new_version = store.update_review(r1, first.version).unwrap().unwrap();
        assert_eq!(new_version, first.version + 1);

        let mut r2 = second.review.clone();
        r2.transition(
            ReviewAction::Schedule {
                date: Utc::now(),
                actor: ActorId::new(),
            },
            Utc::now(),
        )
        .unwrap();
        let err = store.update_review(r2, second.version).unwrap_err();
        assert!(matches!(err, StoreError::VersionConflict { .. }));

        // The committed write survives.
        let stored = store.review(review.id).unwrap().unwrap();
        assert_eq!(stored.review.stage, ReviewStage::ReviewScheduled);
    }
}
