//! Company operations.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use forgehr_auth::{scope, Actor};
use forgehr_core::CompanyId;
use forgehr_guard::org_admin;
use forgehr_org::{Company, CompanyPatch};
use forgehr_store::{ActorDirectory, HrStore};

use crate::{denied, HrError, HrResult, HrService};

/// A company with derived occupancy counts.
///
/// Counts are totals per company, not narrowed to the actor's row-level
/// visibility; the company itself must be in scope to be summarized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub company: Company,
    pub departments_count: usize,
    pub employees_count: usize,
    pub projects_count: usize,
}

impl<S, D> HrService<S, D>
where
    S: HrStore,
    D: ActorDirectory,
{
    pub fn list_companies(&self, actor: &Actor) -> HrResult<Vec<Company>> {
        let visible = scope::companies(actor);
        let mut companies: Vec<Company> = self
            .store()
            .companies()?
            .into_iter()
            .filter(|c| visible.includes_company(c.id))
            .collect();
        companies.sort_by_key(|c| (c.created_at, *c.id.as_uuid()));
        Ok(companies)
    }

    pub fn get_company(&self, actor: &Actor, id: CompanyId) -> HrResult<Company> {
        let visible = scope::companies(actor);
        match self.store().company(id)? {
            Some(company) if visible.includes_company(company.id) => Ok(company),
            _ => Err(HrError::NotFound),
        }
    }

    pub fn list_company_summaries(&self, actor: &Actor) -> HrResult<Vec<CompanySummary>> {
        self.list_companies(actor)?
            .into_iter()
            .map(|company| self.summarize(company))
            .collect()
    }

    pub fn company_summary(&self, actor: &Actor, id: CompanyId) -> HrResult<CompanySummary> {
        let company = self.get_company(actor, id)?;
        self.summarize(company)
    }

    pub fn create_company(&self, actor: &Actor, name: impl Into<String>) -> HrResult<Company> {
        org_admin::company_mutation(actor).map_err(|e| denied(actor, "company.create", e))?;

        let name = name.into();
        self.ensure_company_name_free(&name, None)?;

        let company = Company::new(CompanyId::new(), name, Utc::now());
        self.store().insert_company(company.clone())?;
        info!(company = %company.id, "company created");
        Ok(company)
    }

    pub fn update_company(
        &self,
        actor: &Actor,
        id: CompanyId,
        patch: CompanyPatch,
    ) -> HrResult<Company> {
        org_admin::company_mutation(actor).map_err(|e| denied(actor, "company.update", e))?;

        let mut company = self.store().company(id)?.ok_or(HrError::NotFound)?;
        if let Some(name) = &patch.name {
            self.ensure_company_name_free(name, Some(id))?;
        }
        company.apply(patch, Utc::now());
        if !self.store().update_company(company.clone())? {
            return Err(HrError::NotFound);
        }
        info!(company = %company.id, "company updated");
        Ok(company)
    }

    pub fn delete_company(&self, actor: &Actor, id: CompanyId) -> HrResult<()> {
        org_admin::company_mutation(actor).map_err(|e| denied(actor, "company.delete", e))?;

        if !self.store().delete_company(id)? {
            return Err(HrError::NotFound);
        }
        info!(company = %id, "company deleted (cascade)");
        Ok(())
    }

    fn summarize(&self, company: Company) -> HrResult<CompanySummary> {
        let id = company.id;
        let departments_count = self
            .store()
            .departments()?
            .iter()
            .filter(|d| d.company == id)
            .count();
        let employees_count = self
            .store()
            .employees()?
            .iter()
            .filter(|e| e.company == id)
            .count();
        let projects_count = self
            .store()
            .projects()?
            .iter()
            .filter(|p| p.company == id)
            .count();
        Ok(CompanySummary {
            company,
            departments_count,
            employees_count,
            projects_count,
        })
    }

    fn ensure_company_name_free(&self, name: &str, exclude: Option<CompanyId>) -> HrResult<()> {
        let taken = self
            .store()
            .companies()?
            .iter()
            .any(|c| Some(c.id) != exclude && c.name.eq_ignore_ascii_case(name));
        if taken {
            return Err(HrError::validation(
                "name",
                format!("company name '{name}' is already in use"),
            ));
        }
        Ok(())
    }
}
