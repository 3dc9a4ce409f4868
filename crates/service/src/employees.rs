//! Employee operations.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use forgehr_auth::{scope, Actor, EmployeeScope};
use forgehr_core::{ActorId, CompanyId, DepartmentId, EmployeeId};
use forgehr_guard::employees as guard;
use forgehr_org::{validate, Employee, EmployeePatch};
use forgehr_store::{ActorDirectory, HrStore};

use crate::{denied, HrError, HrResult, HrService};

/// Fields for creating an employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub company: CompanyId,
    pub department: DepartmentId,
    pub linked_actor: Option<ActorId>,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub designation: String,
    pub hired_on: Option<NaiveDate>,
}

impl<S, D> HrService<S, D>
where
    S: HrStore,
    D: ActorDirectory,
{
    pub fn list_employees(&self, actor: &Actor) -> HrResult<Vec<Employee>> {
        let visible = scope::employees(actor);
        let mut employees: Vec<Employee> = self
            .store()
            .employees()?
            .into_iter()
            .filter(|e| employee_visible(&visible, e))
            .collect();
        employees.sort_by_key(|e| (e.created_at, *e.id.as_uuid()));
        Ok(employees)
    }

    pub fn get_employee(&self, actor: &Actor, id: EmployeeId) -> HrResult<Employee> {
        let visible = scope::employees(actor);
        match self.store().employee(id)? {
            Some(employee) if employee_visible(&visible, &employee) => Ok(employee),
            _ => Err(HrError::NotFound),
        }
    }

    pub fn create_employee(&self, actor: &Actor, new: NewEmployee) -> HrResult<Employee> {
        guard::create(actor, new.company).map_err(|e| denied(actor, "employee.create", e))?;

        if self.store().company(new.company)?.is_none() {
            return Err(HrError::validation(
                "company",
                format!("company {} does not exist", new.company),
            ));
        }
        let department = self
            .store()
            .department(new.department)?
            .ok_or_else(|| {
                HrError::validation(
                    "department",
                    format!("department {} does not exist", new.department),
                )
            })?;

        let existing = self.store().employees()?;
        validate::department_in_company(&department, new.company)?;
        validate::email_unique(&new.email, &existing, None)?;
        if let Some(linked) = new.linked_actor {
            validate::identity_link_unique(linked, &existing, None)?;
        }

        let now = Utc::now();
        let employee = Employee {
            id: EmployeeId::new(),
            company: new.company,
            department: new.department,
            linked_actor: new.linked_actor,
            name: new.name,
            email: new.email,
            mobile: new.mobile,
            address: new.address,
            designation: new.designation,
            hired_on: new.hired_on,
            created_at: now,
            updated_at: now,
        };
        self.store().insert_employee(employee.clone())?;
        info!(employee = %employee.id, company = %employee.company, "employee created");
        Ok(employee)
    }

    pub fn update_employee(
        &self,
        actor: &Actor,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> HrResult<Employee> {
        let mut employee = self.store().employee(id)?.ok_or(HrError::NotFound)?;

        // Resolve the reassignment target before the guard runs; the
        // manager rule needs the target actor's company.
        let link_target = match patch.linked_actor {
            Some(Some(target_id)) => Some(self.directory.actor(target_id)?.ok_or_else(|| {
                HrError::validation("linked_actor", format!("unknown actor {target_id}"))
            })?),
            _ => None,
        };

        guard::update(actor, &employee, &patch, link_target.as_ref())
            .map_err(|e| denied(actor, "employee.update", e))?;

        let company_after = patch.company_after(&employee);
        let department_after = patch.department_after(&employee);
        let department = self
            .store()
            .department(department_after)?
            .ok_or_else(|| {
                HrError::validation(
                    "department",
                    format!("department {department_after} does not exist"),
                )
            })?;

        let existing = self.store().employees()?;
        validate::department_in_company(&department, company_after)?;
        if let Some(email) = &patch.email {
            validate::email_unique(email, &existing, Some(id))?;
        }
        if let Some(Some(linked)) = patch.linked_actor {
            validate::identity_link_unique(linked, &existing, Some(id))?;
        }

        employee.apply(patch, Utc::now());
        if !self.store().update_employee(employee.clone())? {
            return Err(HrError::NotFound);
        }
        info!(employee = %employee.id, "employee updated");
        Ok(employee)
    }

    pub fn delete_employee(&self, actor: &Actor, id: EmployeeId) -> HrResult<()> {
        let employee = self.store().employee(id)?.ok_or(HrError::NotFound)?;
        guard::delete(actor, &employee).map_err(|e| denied(actor, "employee.delete", e))?;

        if !self.store().delete_employee(id)? {
            return Err(HrError::NotFound);
        }
        info!(employee = %id, "employee deleted");
        Ok(())
    }

    /// Days employed for a visible employee, as of today.
    pub fn days_employed(&self, actor: &Actor, id: EmployeeId) -> HrResult<Option<i64>> {
        let employee = self.get_employee(actor, id)?;
        Ok(employee.days_employed(Utc::now().date_naive()))
    }
}

fn employee_visible(visible: &EmployeeScope, employee: &Employee) -> bool {
    match visible {
        EmployeeScope::All => true,
        EmployeeScope::Company(company) => employee.company == *company,
        EmployeeScope::LinkedTo(actor) => employee.linked_actor == Some(*actor),
        EmployeeScope::Nothing => false,
    }
}
