//! Project operations.
//!
//! The guard confines managers to their tenant; the validation layer then
//! enforces company consistency of the department and every assignee for
//! all roles, admins included (the stricter reading).

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use forgehr_auth::{scope, Actor};
use forgehr_core::{CompanyId, DepartmentId, EmployeeId, ProjectId};
use forgehr_guard::projects as guard;
use forgehr_org::{validate, Employee, Project, ProjectPatch};
use forgehr_store::{ActorDirectory, HrStore};

use crate::{denied, HrError, HrResult, HrService};

/// Fields for creating a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub company: CompanyId,
    pub department: DepartmentId,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub assigned_employees: Vec<EmployeeId>,
}

impl<S, D> HrService<S, D>
where
    S: HrStore,
    D: ActorDirectory,
{
    pub fn list_projects(&self, actor: &Actor) -> HrResult<Vec<Project>> {
        let visible = scope::projects(actor);
        let mut projects: Vec<Project> = self
            .store()
            .projects()?
            .into_iter()
            .filter(|p| visible.includes_company(p.company))
            .collect();
        projects.sort_by_key(|p| (p.created_at, *p.id.as_uuid()));
        Ok(projects)
    }

    pub fn get_project(&self, actor: &Actor, id: ProjectId) -> HrResult<Project> {
        let visible = scope::projects(actor);
        match self.store().project(id)? {
            Some(project) if visible.includes_company(project.company) => Ok(project),
            _ => Err(HrError::NotFound),
        }
    }

    pub fn create_project(&self, actor: &Actor, new: NewProject) -> HrResult<Project> {
        let department = self.resolve_department(new.department)?;
        let assigned = self.resolve_assignees(&new.assigned_employees)?;
        let assigned_refs: Vec<&Employee> = assigned.iter().collect();

        guard::write(actor, new.company, &department, &assigned_refs)
            .map_err(|e| denied(actor, "project.create", e))?;

        if self.store().company(new.company)?.is_none() {
            return Err(HrError::validation(
                "company",
                format!("company {} does not exist", new.company),
            ));
        }
        validate::department_in_company(&department, new.company)?;
        validate::assigned_employees_in_company(&assigned_refs, new.company)?;

        let now = Utc::now();
        let project = Project {
            id: ProjectId::new(),
            company: new.company,
            department: new.department,
            name: new.name,
            description: new.description,
            start_date: new.start_date,
            end_date: new.end_date,
            assigned_employees: new.assigned_employees,
            created_at: now,
            updated_at: now,
        };
        self.store().insert_project(project.clone())?;
        info!(project = %project.id, company = %project.company, "project created");
        Ok(project)
    }

    pub fn update_project(
        &self,
        actor: &Actor,
        id: ProjectId,
        patch: ProjectPatch,
    ) -> HrResult<Project> {
        let mut project = self.store().project(id)?.ok_or(HrError::NotFound)?;

        let company_after = patch.company_after(&project);
        let department_after = patch.department_after(&project);
        let assigned_after: Vec<EmployeeId> = patch.assigned_after(&project).to_vec();

        let department = self.resolve_department(department_after)?;
        let assigned = self.resolve_assignees(&assigned_after)?;
        let assigned_refs: Vec<&Employee> = assigned.iter().collect();

        guard::update(actor, &project, company_after, &department, &assigned_refs)
            .map_err(|e| denied(actor, "project.update", e))?;

        validate::department_in_company(&department, company_after)?;
        validate::assigned_employees_in_company(&assigned_refs, company_after)?;

        project.apply(patch, Utc::now());
        if !self.store().update_project(project.clone())? {
            return Err(HrError::NotFound);
        }
        info!(project = %project.id, "project updated");
        Ok(project)
    }

    pub fn delete_project(&self, actor: &Actor, id: ProjectId) -> HrResult<()> {
        let project = self.store().project(id)?.ok_or(HrError::NotFound)?;
        guard::delete(actor, &project).map_err(|e| denied(actor, "project.delete", e))?;

        if !self.store().delete_project(id)? {
            return Err(HrError::NotFound);
        }
        info!(project = %id, "project deleted");
        Ok(())
    }

    fn resolve_department(&self, id: DepartmentId) -> HrResult<forgehr_org::Department> {
        self.store().department(id)?.ok_or_else(|| {
            HrError::validation("department", format!("department {id} does not exist"))
        })
    }

    fn resolve_assignees(&self, ids: &[EmployeeId]) -> HrResult<Vec<Employee>> {
        let mut employees = Vec::with_capacity(ids.len());
        for id in ids {
            let employee = self.store().employee(*id)?.ok_or_else(|| {
                HrError::validation(
                    "assigned_employees",
                    format!("employee {id} does not exist"),
                )
            })?;
            employees.push(employee);
        }
        Ok(employees)
    }
}
