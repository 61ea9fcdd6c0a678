use crate::{
    application::services::ApprovalService,
    presentation::dto::{approval_dto::PendingApprovalResponse, ActionOutcome},
    shared::error::AppError,
};
use std::sync::Arc;

pub struct ApprovalsHandler {
    approval_service: Arc<ApprovalService>,
}

impl ApprovalsHandler {
    pub fn new(approval_service: Arc<ApprovalService>) -> Self {
        Self { approval_service }
    }

    pub async fn list_pending(&self) -> Vec<PendingApprovalResponse> {
        self.approval_service
            .pending()
            .await
            .into_iter()
            .map(PendingApprovalResponse::from)
            .collect()
    }

    /// Accepts either a listed id or free text typed into the manual field.
    pub async fn approve(&self, raw: &str) -> Result<ActionOutcome, AppError> {
        let outcome = self.approval_service.approve_manual(raw).await?;
        Ok(ActionOutcome::new(outcome.message, Some(outcome.id.value())))
    }
}
