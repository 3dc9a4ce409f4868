use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use forgehr_core::{CompanyId, DepartmentId, EmployeeId, ProjectId};

/// A project within a company.
///
/// # Invariants
/// - `department` belongs to `company`.
/// - Every assigned employee belongs to `company`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub company: CompanyId,
    pub department: DepartmentId,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub assigned_employees: Vec<EmployeeId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPatch {
    pub company: Option<CompanyId>,
    pub department: Option<DepartmentId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub assigned_employees: Option<Vec<EmployeeId>>,
}

impl ProjectPatch {
    pub fn company_after(&self, current: &Project) -> CompanyId {
        self.company.unwrap_or(current.company)
    }

    pub fn department_after(&self, current: &Project) -> DepartmentId {
        self.department.unwrap_or(current.department)
    }

    pub fn assigned_after<'a>(&'a self, current: &'a Project) -> &'a [EmployeeId] {
        self.assigned_employees
            .as_deref()
            .unwrap_or(&current.assigned_employees)
    }
}

impl Project {
    pub fn apply(&mut self, patch: ProjectPatch, now: DateTime<Utc>) {
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(assigned) = patch.assigned_employees {
            self.assigned_employees = assigned;
        }
        self.updated_at = now;
    }
}
