use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Review lifecycle stage.
///
/// `PendingReview` is the initial stage; `ReviewApproved` is terminal.
/// `ReviewRejected` is not terminal: rejected feedback can be reworked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStage {
    PendingReview,
    ReviewScheduled,
    FeedbackProvided,
    UnderApproval,
    ReviewApproved,
    ReviewRejected,
}

/// The six review operations, as names (payload-free).
///
/// Used for the transition table and for reporting which operation was
/// attempted when a transition is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOp {
    Schedule,
    ProvideFeedback,
    SubmitForApproval,
    Approve,
    Reject,
    ReworkFeedback,
}

/// The requested operation is not valid from the review's current stage.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot {operation} a review in stage {stage}")]
pub struct InvalidTransition {
    pub stage: ReviewStage,
    pub operation: ReviewOp,
}

impl ReviewStage {
    /// The initial stage of every review.
    pub const INITIAL: ReviewStage = ReviewStage::PendingReview;

    /// The central transition table: from-stage × operation → to-stage.
    ///
    /// Every pair outside the table is refused with [`InvalidTransition`].
    pub fn next(self, operation: ReviewOp) -> Result<ReviewStage, InvalidTransition> {
        use ReviewOp as Op;
        use ReviewStage as S;

        match (self, operation) {
            (S::PendingReview, Op::Schedule) => Ok(S::ReviewScheduled),
            (S::ReviewScheduled, Op::ProvideFeedback) => Ok(S::FeedbackProvided),
            (S::FeedbackProvided, Op::SubmitForApproval) => Ok(S::UnderApproval),
            (S::UnderApproval, Op::Approve) => Ok(S::ReviewApproved),
            (S::UnderApproval, Op::Reject) => Ok(S::ReviewRejected),
            (S::ReviewRejected, Op::ReworkFeedback) => Ok(S::FeedbackProvided),
            (stage, operation) => Err(InvalidTransition { stage, operation }),
        }
    }

    /// Whether any operation can still be applied from this stage.
    pub fn is_terminal(self) -> bool {
        matches!(self, ReviewStage::ReviewApproved)
    }
}

impl core::fmt::Display for ReviewStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ReviewStage::PendingReview => "PENDING_REVIEW",
            ReviewStage::ReviewScheduled => "REVIEW_SCHEDULED",
            ReviewStage::FeedbackProvided => "FEEDBACK_PROVIDED",
            ReviewStage::UnderApproval => "UNDER_APPROVAL",
            ReviewStage::ReviewApproved => "REVIEW_APPROVED",
            ReviewStage::ReviewRejected => "REVIEW_REJECTED",
        };
        f.write_str(s)
    }
}

impl core::fmt::Display for ReviewOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ReviewOp::Schedule => "schedule",
            ReviewOp::ProvideFeedback => "provide_feedback",
            ReviewOp::SubmitForApproval => "submit_for_approval",
            ReviewOp::Approve => "approve",
            ReviewOp::Reject => "reject",
            ReviewOp::ReworkFeedback => "rework_feedback",
        };
        f.write_str(s)
    }
}
