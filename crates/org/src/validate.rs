//! Centralized cross-entity invariant checks.
//!
//! Both create and update flows call into these functions, so each rule has
//! exactly one implementation. All checks are pure: callers resolve the
//! referenced records first, then validate before any write.

use forgehr_core::{ActorId, CompanyId, DomainError, DomainResult, EmployeeId};

use crate::{Department, Employee};

/// A department reference must agree on the owning company.
pub fn department_in_company(department: &Department, company: CompanyId) -> DomainResult<()> {
    if department.company != company {
        return Err(DomainError::validation(
            "department",
            format!(
                "department {} belongs to company {}, not {}",
                department.id, department.company, company
            ),
        ));
    }
    Ok(())
}

/// Every assigned employee must belong to the project's company.
///
/// The first offending employee id is named in the error.
pub fn assigned_employees_in_company(
    assigned: &[&Employee],
    company: CompanyId,
) -> DomainResult<()> {
    for employee in assigned {
        if employee.company != company {
            return Err(DomainError::validation(
                "assigned_employees",
                format!("employee {} does not belong to company {}", employee.id, company),
            ));
        }
    }
    Ok(())
}

/// Employee emails are unique. `exclude` skips the record being updated.
pub fn email_unique(
    email: &str,
    existing: &[Employee],
    exclude: Option<EmployeeId>,
) -> DomainResult<()> {
    let taken = existing
        .iter()
        .any(|e| Some(e.id) != exclude && e.email.eq_ignore_ascii_case(email));
    if taken {
        return Err(DomainError::validation(
            "email",
            format!("email '{email}' is already in use"),
        ));
    }
    Ok(())
}

/// At most one employee record per actor identity.
pub fn identity_link_unique(
    actor: ActorId,
    existing: &[Employee],
    exclude: Option<EmployeeId>,
) -> DomainResult<()> {
    let taken = existing
        .iter()
        .any(|e| Some(e.id) != exclude && e.linked_actor == Some(actor));
    if taken {
        return Err(DomainError::validation(
            "linked_actor",
            format!("actor {actor} is already linked to another employee"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use forgehr_core::DepartmentId;

    fn department(company: CompanyId) -> Department {
        Department::new(DepartmentId::new(), company, "Engineering", Utc::now())
    }

    fn employee(company: CompanyId, email: &str, linked: Option<ActorId>) -> Employee {
        let now = Utc::now();
        Employee {
            id: EmployeeId::new(),
            company,
            department: DepartmentId::new(),
            linked_actor: linked,
            name: "Someone".to_string(),
            email: email.to_string(),
            mobile: String::new(),
            address: String::new(),
            designation: "Engineer".to_string(),
            hired_on: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn department_company_mismatch_names_the_field() {
        let company = CompanyId::new();
        let dept = department(CompanyId::new());
        let err = department_in_company(&dept, company).unwrap_err();
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, "department"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn offending_employee_id_is_reported() {
        let company = CompanyId::new();
        let inside = employee(company, "in@example.com", None);
        let outside = employee(CompanyId::new(), "out@example.com", None);
        let err =
            assigned_employees_in_company(&[&inside, &outside], company).unwrap_err();
        match err {
            DomainError::Validation { field, reason } => {
                assert_eq!(field, "assigned_employees");
                assert!(reason.contains(&outside.id.to_string()));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn email_uniqueness_is_case_insensitive() {
        let company = CompanyId::new();
        let existing = vec![employee(company, "Alice@Example.com", None)];
        assert!(email_unique("alice@example.com", &existing, None).is_err());
        assert!(email_unique("bob@example.com", &existing, None).is_ok());
    }

    #[test]
    fn email_check_skips_the_record_under_update() {
        let company = CompanyId::new();
        let existing = vec![employee(company, "alice@example.com", None)];
        let own_id = existing[0].id;
        assert!(email_unique("alice@example.com", &existing, Some(own_id)).is_ok());
    }

    #[test]
    fn one_employee_per_identity() {
        let company = CompanyId::new();
        let actor = ActorId::new();
        let existing = vec![employee(company, "a@example.com", Some(actor))];
        assert!(identity_link_unique(actor, &existing, None).is_err());
        assert!(identity_link_unique(ActorId::new(), &existing, None).is_ok());
    }
}
