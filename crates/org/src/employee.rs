use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use forgehr_core::{ActorId, CompanyId, DepartmentId, EmployeeId};

/// An employee record.
///
/// # Invariants
/// - `department` belongs to `company`.
/// - `email` is unique across all employees.
/// - At most one employee is linked to any given actor identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub company: CompanyId,
    pub department: DepartmentId,
    /// The actor identity this record belongs to, if any.
    pub linked_actor: Option<ActorId>,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub address: String,
    pub designation: String,
    pub hired_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Calendar days employed as of `on`; `None` while no hire date is set.
    pub fn days_employed(&self, on: NaiveDate) -> Option<i64> {
        self.hired_on.map(|hired| (on - hired).num_days())
    }
}

/// Partial update for an employee.
///
/// Nullable fields use a double `Option`: the outer level means "field
/// present in the patch", the inner level is the new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePatch {
    pub company: Option<CompanyId>,
    pub department: Option<DepartmentId>,
    pub linked_actor: Option<Option<ActorId>>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub designation: Option<String>,
    pub hired_on: Option<Option<NaiveDate>>,
}

impl EmployeePatch {
    /// The company the record would have after applying this patch.
    pub fn company_after(&self, current: &Employee) -> CompanyId {
        self.company.unwrap_or(current.company)
    }

    /// The department the record would have after applying this patch.
    pub fn department_after(&self, current: &Employee) -> DepartmentId {
        self.department.unwrap_or(current.department)
    }

    /// The identity link the record would have after applying this patch.
    pub fn linked_actor_after(&self, current: &Employee) -> Option<ActorId> {
        self.linked_actor.unwrap_or(current.linked_actor)
    }
}

impl Employee {
    pub fn apply(&mut self, patch: EmployeePatch, now: DateTime<Utc>) {
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(linked_actor) = patch.linked_actor {
            self.linked_actor = linked_actor;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(mobile) = patch.mobile {
            self.mobile = mobile;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(designation) = patch.designation {
            self.designation = designation;
        }
        if let Some(hired_on) = patch.hired_on {
            self.hired_on = hired_on;
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(hired_on: Option<NaiveDate>) -> Employee {
        let now = Utc::now();
        Employee {
            id: EmployeeId::new(),
            company: CompanyId::new(),
            department: DepartmentId::new(),
            linked_actor: None,
            name: "Alice Smith".to_string(),
            email: "alice@example.com".to_string(),
            mobile: "+100000000".to_string(),
            address: String::new(),
            designation: "Engineer".to_string(),
            hired_on,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn days_employed_counts_calendar_days() {
        let hired = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let emp = sample(Some(hired));
        let on = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(emp.days_employed(on), Some(30));
    }

    #[test]
    fn days_employed_undefined_without_hire_date() {
        let emp = sample(None);
        let on = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(emp.days_employed(on), None);
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut emp = sample(None);
        let original_email = emp.email.clone();
        let patch = EmployeePatch {
            name: Some("Alice Jones".to_string()),
            ..Default::default()
        };
        emp.apply(patch, Utc::now());
        assert_eq!(emp.name, "Alice Jones");
        assert_eq!(emp.email, original_email);
    }

    #[test]
    fn patch_can_clear_nullable_fields() {
        let hired = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut emp = sample(Some(hired));
        let patch = EmployeePatch {
            hired_on: Some(None),
            ..Default::default()
        };
        emp.apply(patch, Utc::now());
        assert_eq!(emp.hired_on, None);
    }
}
