use crate::{
    application::services::{DraftService, SubmitMode},
    domain::{entities::DraftSession, value_objects::ContentId},
    presentation::dto::{
        draft_dto::{DraftRowResponse, SubmitDraftRequest},
        ActionOutcome, Validate,
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct StudioHandler {
    draft_service: Arc<DraftService>,
}

impl StudioHandler {
    pub fn new(draft_service: Arc<DraftService>) -> Self {
        Self { draft_service }
    }

    pub async fn list_drafts(&self, reconcile: bool) -> Result<Vec<DraftRowResponse>, AppError> {
        if reconcile {
            let drafts = self.draft_service.list_reconciled().await?;
            return Ok(drafts
                .into_iter()
                .map(|d| DraftRowResponse::from_entry(d.entry, d.server_status))
                .collect());
        }
        Ok(self
            .draft_service
            .list()
            .await
            .into_iter()
            .map(|entry| DraftRowResponse::from_entry(entry, None))
            .collect())
    }

    pub async fn submit_draft(
        &self,
        mut request: SubmitDraftRequest,
        mode: SubmitMode,
    ) -> Result<ActionOutcome, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let mut session = match request.edit_id.take() {
            Some(raw) => {
                let id = parse_id(&raw)?;
                self.draft_service.load_for_edit(id).await?
            }
            None => DraftSession::new(),
        };
        request.apply_to(session.form_mut());

        let outcome = self.draft_service.submit(&mut session, mode).await?;
        Ok(ActionOutcome::new(
            outcome.message,
            Some(outcome.entry.id.value()),
        ))
    }

    pub async fn delete_draft(&self, raw_id: &str) -> Result<ActionOutcome, AppError> {
        let id = parse_id(raw_id)?;
        let outcome = self.draft_service.delete(id).await?;
        Ok(ActionOutcome::new(outcome.message, Some(id.value())))
    }
}

fn parse_id(raw: &str) -> Result<ContentId, AppError> {
    raw.parse::<ContentId>().map_err(AppError::InvalidInput)
}
