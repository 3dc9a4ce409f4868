use serde::{Deserialize, Serialize};

use forgehr_core::{ActorId, CompanyId, EmployeeId};

use crate::Role;

/// An authenticated actor, as handed over by the identity provider.
///
/// The core never issues or validates credentials; it consumes this
/// descriptor and treats it as trusted. A Manager or Employee without a
/// `company` sees and creates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub role: Role,
    /// The tenant this actor acts within. Admins typically have none.
    pub company: Option<CompanyId>,
    /// The employee record linked to this identity, if any.
    pub employee: Option<EmployeeId>,
}

impl Actor {
    pub fn admin(id: ActorId) -> Self {
        Self {
            id,
            role: Role::Admin,
            company: None,
            employee: None,
        }
    }

    pub fn manager(id: ActorId, company: CompanyId) -> Self {
        Self {
            id,
            role: Role::Manager,
            company: Some(company),
            employee: None,
        }
    }

    pub fn employee(id: ActorId, company: CompanyId, employee: Option<EmployeeId>) -> Self {
        Self {
            id,
            role: Role::Employee,
            company: Some(company),
            employee,
        }
    }
}
