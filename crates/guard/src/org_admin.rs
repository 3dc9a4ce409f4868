//! Guard rules for company and department mutation.
//!
//! Non-admin roles read companies and departments through the scope
//! resolver; mutating the organizational structure itself is an
//! administrative action.

use forgehr_auth::{Actor, Role};

use crate::AccessDenied;

/// Company create/update/delete: Admin only.
pub fn company_mutation(actor: &Actor) -> Result<(), AccessDenied> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Manager | Role::Employee => {
            Err(AccessDenied::new("only admins can modify companies"))
        }
    }
}

/// Department create/update/delete: Admin only.
pub fn department_mutation(actor: &Actor) -> Result<(), AccessDenied> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Manager | Role::Employee => {
            Err(AccessDenied::new("only admins can modify departments"))
        }
    }
}
