//! Access scope resolution: (actor, entity type) → row-level predicate.
//!
//! Resolution is pure and deterministic. The resulting scope values are
//! data-only predicates; the store/service layers evaluate them against
//! records. Resolution never touches storage and has no side effects.

use forgehr_core::{ActorId, CompanyId};

use crate::{Actor, Role};

/// Visibility over a company-owned entity type (companies, departments,
/// projects).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Every record, regardless of tenant.
    All,
    /// Records of exactly one company.
    Company(CompanyId),
    /// No records at all.
    Nothing,
}

impl Scope {
    /// Whether a record owned by `company` falls inside this scope.
    pub fn includes_company(&self, company: CompanyId) -> bool {
        match self {
            Scope::All => true,
            Scope::Company(own) => *own == company,
            Scope::Nothing => false,
        }
    }
}

/// Visibility over employee records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeScope {
    All,
    Company(CompanyId),
    /// Only the single record linked to this actor identity.
    LinkedTo(ActorId),
    Nothing,
}

/// Visibility over reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewScope {
    All,
    /// Reviews whose employee belongs to this company.
    Company(CompanyId),
    /// Reviews whose employee belongs to this company *and* is linked to
    /// this actor identity.
    OwnInCompany { company: CompanyId, actor: ActorId },
    Nothing,
}

/// Scope for companies: non-admins see exactly their own tenant.
pub fn companies(actor: &Actor) -> Scope {
    match (actor.role, actor.company) {
        (Role::Admin, _) => Scope::All,
        (Role::Manager | Role::Employee, Some(company)) => Scope::Company(company),
        (Role::Manager | Role::Employee, None) => Scope::Nothing,
    }
}

/// Scope for departments.
pub fn departments(actor: &Actor) -> Scope {
    match (actor.role, actor.company) {
        (Role::Admin, _) => Scope::All,
        (Role::Manager | Role::Employee, Some(company)) => Scope::Company(company),
        (Role::Manager | Role::Employee, None) => Scope::Nothing,
    }
}

/// Scope for employee listings.
///
/// An Employee-role actor sees at most one record: the one linked to their
/// identity.
pub fn employees(actor: &Actor) -> EmployeeScope {
    match (actor.role, actor.company) {
        (Role::Admin, _) => EmployeeScope::All,
        (Role::Manager, Some(company)) => EmployeeScope::Company(company),
        (Role::Manager, None) => EmployeeScope::Nothing,
        (Role::Employee, _) => EmployeeScope::LinkedTo(actor.id),
    }
}

/// Scope for project listings.
pub fn projects(actor: &Actor) -> Scope {
    match (actor.role, actor.company) {
        (Role::Admin, _) => Scope::All,
        (Role::Manager | Role::Employee, Some(company)) => Scope::Company(company),
        (Role::Manager | Role::Employee, None) => Scope::Nothing,
    }
}

/// Scope for review listings.
///
/// An Employee-role actor sees reviews of the employee record linked to
/// their identity, within their own tenant.
pub fn reviews(actor: &Actor) -> ReviewScope {
    match (actor.role, actor.company) {
        (Role::Admin, _) => ReviewScope::All,
        (Role::Manager, Some(company)) => ReviewScope::Company(company),
        (Role::Employee, Some(company)) => ReviewScope::OwnInCompany {
            company,
            actor: actor.id,
        },
        (Role::Manager | Role::Employee, None) => ReviewScope::Nothing,
    }
}
