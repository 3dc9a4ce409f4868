//! Department operations.
//!
//! Protect-on-delete lives here: the store is policy-free, so the service
//! checks for referencing employees/projects before deleting.

use chrono::Utc;
use tracing::info;

use forgehr_auth::{scope, Actor};
use forgehr_core::{CompanyId, DepartmentId};
use forgehr_guard::org_admin;
use forgehr_org::{Department, DepartmentPatch};
use forgehr_store::{ActorDirectory, HrStore};

use crate::{denied, HrError, HrResult, HrService};

impl<S, D> HrService<S, D>
where
    S: HrStore,
    D: ActorDirectory,
{
    pub fn list_departments(&self, actor: &Actor) -> HrResult<Vec<Department>> {
        let visible = scope::departments(actor);
        let mut departments: Vec<Department> = self
            .store()
            .departments()?
            .into_iter()
            .filter(|d| visible.includes_company(d.company))
            .collect();
        departments.sort_by_key(|d| (d.created_at, *d.id.as_uuid()));
        Ok(departments)
    }

    pub fn get_department(&self, actor: &Actor, id: DepartmentId) -> HrResult<Department> {
        let visible = scope::departments(actor);
        match self.store().department(id)? {
            Some(department) if visible.includes_company(department.company) => Ok(department),
            _ => Err(HrError::NotFound),
        }
    }

    pub fn create_department(
        &self,
        actor: &Actor,
        company: CompanyId,
        name: impl Into<String>,
    ) -> HrResult<Department> {
        org_admin::department_mutation(actor).map_err(|e| denied(actor, "department.create", e))?;

        if self.store().company(company)?.is_none() {
            return Err(HrError::validation(
                "company",
                format!("company {company} does not exist"),
            ));
        }

        let department = Department::new(DepartmentId::new(), company, name, Utc::now());
        self.store().insert_department(department.clone())?;
        info!(department = %department.id, company = %company, "department created");
        Ok(department)
    }

    pub fn update_department(
        &self,
        actor: &Actor,
        id: DepartmentId,
        patch: DepartmentPatch,
    ) -> HrResult<Department> {
        org_admin::department_mutation(actor).map_err(|e| denied(actor, "department.update", e))?;

        let mut department = self.store().department(id)?.ok_or(HrError::NotFound)?;
        department.apply(patch, Utc::now());
        if !self.store().update_department(department.clone())? {
            return Err(HrError::NotFound);
        }
        info!(department = %department.id, "department updated");
        Ok(department)
    }

    pub fn delete_department(&self, actor: &Actor, id: DepartmentId) -> HrResult<()> {
        org_admin::department_mutation(actor).map_err(|e| denied(actor, "department.delete", e))?;

        if self.store().department(id)?.is_none() {
            return Err(HrError::NotFound);
        }

        // Protect-on-delete: block while anything references the department.
        if let Some(employee) = self
            .store()
            .employees()?
            .iter()
            .find(|e| e.department == id)
        {
            return Err(HrError::validation(
                "department",
                format!("department is referenced by employee {}", employee.id),
            ));
        }
        if let Some(project) = self.store().projects()?.iter().find(|p| p.department == id) {
            return Err(HrError::validation(
                "department",
                format!("department is referenced by project {}", project.id),
            ));
        }

        if !self.store().delete_department(id)? {
            return Err(HrError::NotFound);
        }
        info!(department = %id, "department deleted");
        Ok(())
    }
}
