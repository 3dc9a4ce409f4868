use serde::{Deserialize, Serialize};

/// The closed set of roles.
///
/// Roles drive branching in the scope resolver and the guard through
/// exhaustive pattern matching; there are deliberately no stringly-typed
/// role comparisons anywhere in the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Employee,
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Employee => "EMPLOYEE",
        };
        f.write_str(s)
    }
}
