use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forgehr_core::{ActorId, EmployeeId, ReviewId};

use crate::stage::{InvalidTransition, ReviewOp, ReviewStage};

/// An employee review moving through the approval lifecycle.
///
/// Reviews are created in [`ReviewStage::INITIAL`] and mutated only through
/// [`EmployeeReview::transition`]. There is no delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReview {
    pub id: ReviewId,
    pub employee: EmployeeId,
    pub stage: ReviewStage,
    pub review_date: Option<DateTime<Utc>>,
    pub feedback: String,
    pub submitted_by: Option<ActorId>,
    pub approved_by: Option<ActorId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EmployeeReview {
    /// A fresh review in the initial stage.
    pub fn new(id: ReviewId, employee: EmployeeId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            employee,
            stage: ReviewStage::INITIAL,
            review_date: None,
            feedback: String::new(),
            submitted_by: None,
            approved_by: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A transition request: operation name plus its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewAction {
    Schedule { date: DateTime<Utc>, actor: ActorId },
    ProvideFeedback { text: String, actor: ActorId },
    SubmitForApproval,
    Approve { actor: ActorId },
    Reject { actor: ActorId },
    ReworkFeedback { text: String, actor: ActorId },
}

impl ReviewAction {
    /// The operation name, for the transition table and error reporting.
    pub fn op(&self) -> ReviewOp {
        match self {
            ReviewAction::Schedule { .. } => ReviewOp::Schedule,
            ReviewAction::ProvideFeedback { .. } => ReviewOp::ProvideFeedback,
            ReviewAction::SubmitForApproval => ReviewOp::SubmitForApproval,
            ReviewAction::Approve { .. } => ReviewOp::Approve,
            ReviewAction::Reject { .. } => ReviewOp::Reject,
            ReviewAction::ReworkFeedback { .. } => ReviewOp::ReworkFeedback,
        }
    }
}

impl EmployeeReview {
    /// Apply a transition.
    ///
    /// The table is consulted before anything is written: on refusal the
    /// record is untouched. Persisting the mutated record is the caller's
    /// responsibility, performed only after success.
    pub fn transition(
        &mut self,
        action: ReviewAction,
        now: DateTime<Utc>,
    ) -> Result<(), InvalidTransition> {
        let next = self.stage.next(action.op())?;

        match action {
            ReviewAction::Schedule { date, actor } => {
                self.review_date = Some(date);
                self.submitted_by = Some(actor);
            }
            ReviewAction::ProvideFeedback { text, actor }
            | ReviewAction::ReworkFeedback { text, actor } => {
                self.feedback = text;
                self.submitted_by = Some(actor);
            }
            ReviewAction::SubmitForApproval => {}
            ReviewAction::Approve { actor } | ReviewAction::Reject { actor } => {
                self.approved_by = Some(actor);
            }
        }

        self.stage = next;
        self.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn fresh() -> EmployeeReview {
        EmployeeReview::new(ReviewId::new(), EmployeeId::new(), now())
    }

    fn drive_to_under_approval(review: &mut EmployeeReview, actor: ActorId) {
        review
            .transition(ReviewAction::Schedule { date: now(), actor }, now())
            .unwrap();
        review
            .transition(
                ReviewAction::ProvideFeedback {
                    text: "solid quarter".to_string(),
                    actor,
                },
                now(),
            )
            .unwrap();
        review
            .transition(ReviewAction::SubmitForApproval, now())
            .unwrap();
    }

    #[test]
    fn full_lifecycle_to_approved() {
        let mut review = fresh();
        let actor = ActorId::new();
        assert_eq!(review.stage, ReviewStage::PendingReview);

        drive_to_under_approval(&mut review, actor);
        assert_eq!(review.stage, ReviewStage::UnderApproval);
        assert_eq!(review.submitted_by, Some(actor));
        assert_eq!(review.feedback, "solid quarter");

        let approver = ActorId::new();
        review
            .transition(ReviewAction::Approve { actor: approver }, now())
            .unwrap();
        assert_eq!(review.stage, ReviewStage::ReviewApproved);
        assert_eq!(review.approved_by, Some(approver));
    }

    #[test]
    fn reject_then_rework_returns_to_feedback_provided() {
        let mut review = fresh();
        let actor = ActorId::new();
        drive_to_under_approval(&mut review, actor);

        review
            .transition(ReviewAction::Reject { actor }, now())
            .unwrap();
        assert_eq!(review.stage, ReviewStage::ReviewRejected);

        review
            .transition(
                ReviewAction::ReworkFeedback {
                    text: "revised after rejection".to_string(),
                    actor,
                },
                now(),
            )
            .unwrap();
        assert_eq!(review.stage, ReviewStage::FeedbackProvided);
        assert_eq!(review.feedback, "revised after rejection");
    }

    #[test]
    fn approve_straight_after_schedule_is_refused_and_leaves_state_alone() {
        let mut review = fresh();
        let actor = ActorId::new();
        review
            .transition(ReviewAction::Schedule { date: now(), actor }, now())
            .unwrap();
        let before = review.clone();

        let err = review
            .transition(ReviewAction::Approve { actor }, now())
            .unwrap_err();
        assert_eq!(err.stage, ReviewStage::ReviewScheduled);
        assert_eq!(err.operation, ReviewOp::Approve);
        assert_eq!(review, before);
    }

    #[test]
    fn approved_review_admits_nothing_further() {
        let mut review = fresh();
        let actor = ActorId::new();
        drive_to_under_approval(&mut review, actor);
        review
            .transition(ReviewAction::Approve { actor }, now())
            .unwrap();

        let before = review.clone();
        let attempts = [
            ReviewAction::Schedule { date: now(), actor },
            ReviewAction::ProvideFeedback {
                text: "late".to_string(),
                actor,
            },
            ReviewAction::SubmitForApproval,
            ReviewAction::Approve { actor },
            ReviewAction::Reject { actor },
            ReviewAction::ReworkFeedback {
                text: "late".to_string(),
                actor,
            },
        ];
        for action in attempts {
            assert!(review.transition(action, now()).is_err());
            assert_eq!(review, before);
        }
    }

    #[test]
    fn refused_transition_is_idempotent() {
        let mut review = fresh();
        let actor = ActorId::new();
        let first = review
            .transition(ReviewAction::Approve { actor }, now())
            .unwrap_err();
        let second = review
            .transition(ReviewAction::Approve { actor }, now())
            .unwrap_err();
        assert_eq!(first, second);
        assert_eq!(review.stage, ReviewStage::PendingReview);
    }
}
