pub mod approval_service;
pub mod draft_service;
pub mod feed_service;
pub mod reconcile;

#[cfg(test)]
pub(crate) mod test_support;

pub use approval_service::{ApprovalOutcome, ApprovalService};
pub use draft_service::{DeleteOutcome, DraftService, SubmitMode, SubmitOutcome};
pub use feed_service::FeedService;
pub use reconcile::{ReconciledDraft, StatusReconciler};
