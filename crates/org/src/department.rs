use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forgehr_core::{CompanyId, DepartmentId};

/// A department within a company.
///
/// Deletion is blocked while any employee or project references it
/// (protect-on-delete); the service layer checks this before the store
/// delete. A department never moves between companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub company: CompanyId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Department {
    pub fn new(
        id: DepartmentId,
        company: CompanyId,
        name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            company,
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a department.
///
/// The owning company is intentionally not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPatch {
    pub name: Option<String>,
}

impl Department {
    pub fn apply(&mut self, patch: DepartmentPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.updated_at = now;
    }
}
