//! Guard rules for employee records.

use forgehr_auth::{Actor, Role};
use forgehr_core::CompanyId;
use forgehr_org::{Employee, EmployeePatch};

use crate::{manager_tenant, AccessDenied};

/// Employee create: Admin anywhere, Manager only inside their own tenant.
pub fn create(actor: &Actor, company: CompanyId) -> Result<(), AccessDenied> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Manager => {
            if manager_tenant(actor)? != company {
                return Err(AccessDenied::new(
                    "managers can only create employees in their own company",
                ));
            }
            Ok(())
        }
        Role::Employee => Err(AccessDenied::new("employees cannot create employee records")),
    }
}

/// Employee update.
///
/// `link_target` is the resolved actor the patch would link the record to,
/// when the patch reassigns the identity link; the service resolves it
/// through the identity directory before calling in.
pub fn update(
    actor: &Actor,
    current: &Employee,
    patch: &EmployeePatch,
    link_target: Option<&Actor>,
) -> Result<(), AccessDenied> {
    match actor.role {
        Role::Admin => Ok(()),

        Role::Manager => {
            let tenant = manager_tenant(actor)?;
            if current.company != tenant {
                return Err(AccessDenied::new(
                    "managers can only update employees in their own company",
                ));
            }
            if patch.company_after(current) != current.company {
                return Err(AccessDenied::new(
                    "managers cannot change an employee's company",
                ));
            }
            if patch.department_after(current) != current.department {
                return Err(AccessDenied::new(
                    "managers cannot change an employee's department",
                ));
            }
            if let Some(Some(_)) = patch.linked_actor {
                match link_target {
                    Some(target) if target.company == Some(tenant) => {}
                    _ => {
                        return Err(AccessDenied::new(
                            "managers can only link employees to actors of their own company",
                        ));
                    }
                }
            }
            Ok(())
        }

        Role::Employee => {
            if current.linked_actor != Some(actor.id) {
                return Err(AccessDenied::new(
                    "employees can only update their own record",
                ));
            }
            // Restricted fields may appear in the patch, but only with the
            // value already stored.
            if patch.company_after(current) != current.company {
                return Err(AccessDenied::new("employees cannot change company"));
            }
            if patch.department_after(current) != current.department {
                return Err(AccessDenied::new("employees cannot change department"));
            }
            if patch.linked_actor_after(current) != current.linked_actor {
                return Err(AccessDenied::new("employees cannot change linked_actor"));
            }
            Ok(())
        }
    }
}

/// Employee delete: an employee may never delete their own record; a
/// manager only deletes inside their tenant.
pub fn delete(actor: &Actor, target: &Employee) -> Result<(), AccessDenied> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Manager => {
            if manager_tenant(actor)? != target.company {
                return Err(AccessDenied::new(
                    "managers can only delete employees in their own company",
                ));
            }
            Ok(())
        }
        Role::Employee => {
            // The only record an Employee-role actor is barred from
            // deleting is the one linked to their own identity.
            if target.linked_actor == Some(actor.id) {
                return Err(AccessDenied::new("employees cannot delete themselves"));
            }
            Ok(())
        }
    }
}
