use thiserror::Error;

use crate::gate::FieldIssue;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("advance blocked: {} field issue(s)", issues.len())]
    AdvanceBlocked { issues: Vec<FieldIssue> },

    #[error("an operation is already in flight for slot '{slot}'")]
    SlotBusy { slot: String },

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("cannot {action} from step {step:?}")]
    InvalidTransition {
        action: &'static str,
        step: veridia_core::models::MajorStep,
    },
}

/// Failure reported by an external collaborator call (upload, payment,
/// coupon validation, submission insert). Always non-fatal to wizard
/// state; the user retries the same action.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("upload failed: {0}")]
    Upload(String),

    #[error("payment collaborator error: {0}")]
    Payment(String),

    #[error("coupon rejected: {0}")]
    CouponRejected(String),

    #[error("submission insert failed: {0}")]
    Insert(String),

    #[error("network error: {0}")]
    Network(String),
}
