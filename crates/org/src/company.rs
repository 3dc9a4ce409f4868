use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forgehr_core::CompanyId;

/// A company: the tenant and root of ownership.
///
/// Departments, employees, projects, and (transitively) reviews all belong
/// to exactly one company; deleting a company cascades to all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    /// Unique across all companies.
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    pub fn new(id: CompanyId, name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPatch {
    pub name: Option<String>,
}

impl Company {
    /// Apply a patch in place. Callers validate before applying.
    pub fn apply(&mut self, patch: CompanyPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        self.updated_at = now;
    }
}
