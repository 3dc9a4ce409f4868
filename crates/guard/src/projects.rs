//! Guard rules for projects.
//!
//! Managers are confined to their tenant for the project's company, its
//! department, and every assigned employee; a violation through an
//! assigned employee names the offending employee id. Admins choose the
//! company freely; company consistency of department and assignees is the
//! validation layer's concern and applies to every role.

use forgehr_auth::{Actor, Role};
use forgehr_core::CompanyId;
use forgehr_org::{Department, Employee, Project};

use crate::{manager_tenant, AccessDenied};

/// Shared rule for project create and update changesets.
///
/// `company` is the company the project would have after the write;
/// `department` and `assigned` are the resolved records referenced by the
/// changeset.
pub fn write(
    actor: &Actor,
    company: CompanyId,
    department: &Department,
    assigned: &[&Employee],
) -> Result<(), AccessDenied> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Manager => {
            let tenant = manager_tenant(actor)?;
            if company != tenant {
                return Err(AccessDenied::new(
                    "managers cannot create or update projects for other companies",
                ));
            }
            if department.company != tenant {
                return Err(AccessDenied::new(
                    "managers cannot assign a department from another company",
                ));
            }
            for employee in assigned {
                if employee.company != tenant {
                    return Err(AccessDenied::new(format!(
                        "employee {} does not belong to your company",
                        employee.id
                    )));
                }
            }
            Ok(())
        }
        Role::Employee => Err(AccessDenied::new(
            "employees cannot create or update projects",
        )),
    }
}

/// Project update additionally requires the manager to own the *current*
/// project before the changeset rules apply.
pub fn update(
    actor: &Actor,
    current: &Project,
    company_after: CompanyId,
    department: &Department,
    assigned: &[&Employee],
) -> Result<(), AccessDenied> {
    if actor.role == Role::Manager && Some(current.company) != actor.company {
        return Err(AccessDenied::new(
            "managers cannot update projects from another company",
        ));
    }
    write(actor, company_after, department, assigned)
}

/// Project delete: Employee denied, Manager within tenant only.
pub fn delete(actor: &Actor, project: &Project) -> Result<(), AccessDenied> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Manager => {
            if manager_tenant(actor)? != project.company {
                return Err(AccessDenied::new(
                    "managers cannot delete projects from another company",
                ));
            }
            Ok(())
        }
        Role::Employee => Err(AccessDenied::new("employees cannot delete projects")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use forgehr_core::{ActorId, DepartmentId, EmployeeId, ProjectId};

    fn department_in(company: CompanyId) -> Department {
        Department::new(DepartmentId::new(), company, "Platform", Utc::now())
    }

    fn employee_in(company: CompanyId) -> Employee {
        let now = Utc::now();
        Employee {
            id: EmployeeId::new(),
            company,
            department: DepartmentId::new(),
            linked_actor: None,
            name: "Kim".to_string(),
            email: format!("{}@example.com", EmployeeId::new()),
            mobile: String::new(),
            address: String::new(),
            designation: "Engineer".to_string(),
            hired_on: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn project_in(company: CompanyId) -> Project {
        let now = Utc::now();
        Project {
            id: ProjectId::new(),
            company,
            department: DepartmentId::new(),
            name: "Migration".to_string(),
            description: String::new(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            assigned_employees: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn employee_role_is_always_denied() {
        let company = CompanyId::new();
        let actor = Actor::employee(ActorId::new(), company, None);
        let dept = department_in(company);
        assert!(write(&actor, company, &dept, &[]).is_err());
        assert!(delete(&actor, &project_in(company)).is_err());
    }

    #[test]
    fn manager_cross_tenant_assignee_names_the_employee() {
        let tenant = CompanyId::new();
        let manager = Actor::manager(ActorId::new(), tenant);
        let dept = department_in(tenant);
        let inside = employee_in(tenant);
        let outside = employee_in(CompanyId::new());

        let err = write(&manager, tenant, &dept, &[&inside, &outside]).unwrap_err();
        assert!(err.reason().contains(&outside.id.to_string()));
    }

    #[test]
    fn manager_cannot_target_a_foreign_company_or_department() {
        let tenant = CompanyId::new();
        let manager = Actor::manager(ActorId::new(), tenant);
        let foreign = CompanyId::new();

        assert!(write(&manager, foreign, &department_in(foreign), &[]).is_err());
        assert!(write(&manager, tenant, &department_in(foreign), &[]).is_err());
        assert!(write(&manager, tenant, &department_in(tenant), &[]).is_ok());
    }

    #[test]
    fn manager_cannot_update_a_project_they_do_not_own() {
        let tenant = CompanyId::new();
        let manager = Actor::manager(ActorId::new(), tenant);
        let foreign_project = project_in(CompanyId::new());
        let dept = department_in(tenant);
        let err = update(&manager, &foreign_project, tenant, &dept, &[]).unwrap_err();
        assert!(err.reason().contains("another company"));
    }

    #[test]
    fn admin_is_unrestricted_here() {
        let admin = Actor::admin(ActorId::new());
        let company = CompanyId::new();
        // Consistency of department/assignees with the project's company is
        // checked by validation, not the guard.
        let foreign_dept = department_in(CompanyId::new());
        assert!(write(&admin, company, &foreign_dept, &[]).is_ok());
        assert!(delete(&admin, &project_in(company)).is_ok());
    }
}
