//! Review operations: create, list/get, and the six workflow transitions.
//!
//! A transition is a read-modify-write: the review is read with its store
//! version, the guard and the state machine run against that snapshot, and
//! the write commits only if the version is unchanged. Two actors racing
//! past the same guard cannot both win; the loser surfaces a conflict.

use chrono::{DateTime, Utc};
use tracing::info;

use forgehr_auth::{scope, Actor, ReviewScope};
use forgehr_core::{EmployeeId, ReviewId};
use forgehr_guard::reviews as guard;
use forgehr_org::Employee;
use forgehr_reviews::{EmployeeReview, ReviewAction};
use forgehr_store::{ActorDirectory, HrStore, VersionedReview};

use crate::{denied, HrError, HrResult, HrService};

impl<S, D> HrService<S, D>
where
    S: HrStore,
    D: ActorDirectory,
{
    pub fn list_reviews(&self, actor: &Actor) -> HrResult<Vec<EmployeeReview>> {
        let visible = scope::reviews(actor);
        let employees = self.store().employees()?;
        let mut reviews: Vec<EmployeeReview> = self
            .store()
            .reviews()?
            .into_iter()
            .filter(|r| review_visible(&visible, r, &employees))
            .collect();
        reviews.sort_by_key(|r| (r.created_at, *r.id.as_uuid()));
        Ok(reviews)
    }

    pub fn get_review(&self, actor: &Actor, id: ReviewId) -> HrResult<EmployeeReview> {
        let visible = scope::reviews(actor);
        let employees = self.store().employees()?;
        match self.store().review(id)? {
            Some(VersionedReview { review, .. }) if review_visible(&visible, &review, &employees) => {
                Ok(review)
            }
            _ => Err(HrError::NotFound),
        }
    }

    pub fn create_review(&self, actor: &Actor, employee: EmployeeId) -> HrResult<EmployeeReview> {
        let subject = self.store().employee(employee)?.ok_or(HrError::NotFound)?;
        guard::create(actor, &subject).map_err(|e| denied(actor, "review.create", e))?;

        let review = EmployeeReview::new(ReviewId::new(), employee, Utc::now());
        self.store().insert_review(review.clone())?;
        info!(review = %review.id, employee = %employee, "review created");
        Ok(review)
    }

    pub fn schedule_review(
        &self,
        actor: &Actor,
        id: ReviewId,
        date: DateTime<Utc>,
    ) -> HrResult<EmployeeReview> {
        self.transition_review(actor, id, ReviewAction::Schedule { date, actor: actor.id })
    }

    pub fn provide_feedback(
        &self,
        actor: &Actor,
        id: ReviewId,
        text: impl Into<String>,
    ) -> HrResult<EmployeeReview> {
        self.transition_review(
            actor,
            id,
            ReviewAction::ProvideFeedback {
                text: text.into(),
                actor: actor.id,
            },
        )
    }

    pub fn submit_for_approval(&self, actor: &Actor, id: ReviewId) -> HrResult<EmployeeReview> {
        self.transition_review(actor, id, ReviewAction::SubmitForApproval)
    }

    pub fn approve_review(&self, actor: &Actor, id: ReviewId) -> HrResult<EmployeeReview> {
        self.transition_review(actor, id, ReviewAction::Approve { actor: actor.id })
    }

    pub fn reject_review(&self, actor: &Actor, id: ReviewId) -> HrResult<EmployeeReview> {
        self.transition_review(actor, id, ReviewAction::Reject { actor: actor.id })
    }

    pub fn rework_feedback(
        &self,
        actor: &Actor,
        id: ReviewId,
        text: impl Into<String>,
    ) -> HrResult<EmployeeReview> {
        self.transition_review(
            actor,
            id,
            ReviewAction::ReworkFeedback {
                text: text.into(),
                actor: actor.id,
            },
        )
    }

    fn transition_review(
        &self,
        actor: &Actor,
        id: ReviewId,
        action: ReviewAction,
    ) -> HrResult<EmployeeReview> {
        let VersionedReview {
            mut review,
            version,
        } = self.store().review(id)?.ok_or(HrError::NotFound)?;
        let subject = self
            .store()
            .employee(review.employee)?
            .ok_or(HrError::NotFound)?;

        guard::transition(actor, &subject).map_err(|e| denied(actor, "review.transition", e))?;

        let op = action.op();
        review.transition(action, Utc::now())?;

        // The version check makes the read-modify-write atomic per review.
        match self.store().update_review(review.clone(), version)? {
            Some(_) => {
                info!(review = %review.id, %op, stage = %review.stage, "review transitioned");
                Ok(review)
            }
            None => Err(HrError::NotFound),
        }
    }
}

fn review_visible(
    visible: &ReviewScope,
    review: &EmployeeReview,
    employees: &[Employee],
) -> bool {
    let subject = employees.iter().find(|e| e.id == review.employee);
    match visible {
        ReviewScope::All => true,
        ReviewScope::Company(company) => {
            subject.is_some_and(|e| e.company == *company)
        }
        ReviewScope::OwnInCompany { company, actor } => subject
            .is_some_and(|e| e.company == *company && e.linked_actor == Some(*actor)),
        ReviewScope::Nothing => false,
    }
}
