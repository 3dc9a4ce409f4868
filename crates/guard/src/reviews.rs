//! Guard rules for employee reviews.
//!
//! One rule covers creation and all six transition operations: Admin
//! always, Manager only when the review's employee belongs to their
//! tenant, Employee never. Employees can read their own reviews through
//! the scope resolver but never move them through the workflow.

use forgehr_auth::{Actor, Role};
use forgehr_org::Employee;

use crate::{manager_tenant, AccessDenied};

/// Review create, targeting `employee`.
pub fn create(actor: &Actor, employee: &Employee) -> Result<(), AccessDenied> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Manager => {
            if manager_tenant(actor)? != employee.company {
                return Err(AccessDenied::new(
                    "managers can only create reviews for employees of their own company",
                ));
            }
            Ok(())
        }
        Role::Employee => Err(AccessDenied::new("employees cannot create reviews")),
    }
}

/// Any review transition, where `employee` is the review's subject.
pub fn transition(actor: &Actor, employee: &Employee) -> Result<(), AccessDenied> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Manager => {
            if manager_tenant(actor)? != employee.company {
                return Err(AccessDenied::new(
                    "only an admin or a manager of the same company can act on this review",
                ));
            }
            Ok(())
        }
        Role::Employee => Err(AccessDenied::new("employees cannot act on reviews")),
    }
}
