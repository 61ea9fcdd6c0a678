use super::reconcile::{ReconciledDraft, StatusReconciler};
use crate::application::ports::{ContentGateway, TokenProvider};
use crate::domain::entities::{DraftEntry, DraftForm, DraftSession, NewContent, VariantInput};
use crate::domain::value_objects::{ContentId, DraftStatus};
use crate::infrastructure::storage::LocalDraftStore;
use crate::shared::error::AppError;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// Keep the entry as a local draft.
    Draft,
    /// Mark the entry as awaiting approval.
    Review,
}

impl SubmitMode {
    fn status(self) -> DraftStatus {
        match self {
            SubmitMode::Draft => DraftStatus::Draft,
            SubmitMode::Review => DraftStatus::PendingApproval,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub entry: DraftEntry,
    pub entries: Vec<DraftEntry>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct DeleteOutcome {
    pub entries: Vec<DraftEntry>,
    pub message: String,
}

/// Backs the draft studio: save, submit, edit and local delete.
pub struct DraftService {
    tokens: Arc<dyn TokenProvider>,
    gateway: Arc<dyn ContentGateway>,
    store: Arc<LocalDraftStore>,
    reconciler: StatusReconciler,
}

impl DraftService {
    pub fn new(
        tokens: Arc<dyn TokenProvider>,
        gateway: Arc<dyn ContentGateway>,
        store: Arc<LocalDraftStore>,
    ) -> Self {
        let reconciler = StatusReconciler::new(Arc::clone(&gateway));
        Self {
            tokens,
            gateway,
            store,
            reconciler,
        }
    }

    pub async fn list(&self) -> Vec<DraftEntry> {
        self.store.load().await
    }

    /// Local entries annotated with their server status.
    pub async fn list_reconciled(&self) -> Result<Vec<ReconciledDraft>, AppError> {
        let entries = self.store.load().await;
        if entries.is_empty() {
            return Ok(Vec::new());
        }
        let token = self.tokens.get_token().await?;
        Ok(self.reconciler.reconcile(&token, entries).await)
    }

    /// Opens an edit session for a cached entry.
    pub async fn load_for_edit(&self, id: ContentId) -> Result<DraftSession, AppError> {
        self.store
            .find(id)
            .await
            .map(|entry| DraftSession::for_edit(&entry))
            .ok_or_else(|| AppError::NotFound(format!("Draft {id} is not in the local store")))
    }

    /// Saves the session's form remotely, then records it locally.
    ///
    /// Nothing is written locally unless every remote call succeeded.
    pub async fn submit(
        &self,
        session: &mut DraftSession,
        mode: SubmitMode,
    ) -> Result<SubmitOutcome, AppError> {
        session
            .form()
            .validate()
            .map_err(AppError::ValidationError)?;
        session.begin_saving().map_err(AppError::InvalidInput)?;

        let editing = session.editing_draft_id();
        let id = match self.save_remote(session.form(), editing).await {
            Ok(id) => id,
            Err(err) => {
                session.finish_failed();
                return Err(err);
            }
        };

        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let entry = session.form().to_entry(id, mode.status(), created_at);
        let snapshot = self.store.load().await;
        let entries = match self.store.upsert_local(snapshot, entry.clone()).await {
            Ok(entries) => entries,
            Err(err) => {
                session.finish_failed();
                return Err(err);
            }
        };

        let message = submit_message(editing.is_some(), mode, id);
        info!("{message}");
        session.finish_saved(id);
        Ok(SubmitOutcome {
            entry,
            entries,
            message,
        })
    }

    /// Removes the entry from the local store only; the server keeps the record.
    pub async fn delete(&self, id: ContentId) -> Result<DeleteOutcome, AppError> {
        let snapshot = self.store.load().await;
        let entries = self.store.delete_local(snapshot, id).await?;
        Ok(DeleteOutcome {
            entries,
            message: format!("Draft {id} deleted."),
        })
    }

    async fn save_remote(
        &self,
        form: &DraftForm,
        editing: Option<ContentId>,
    ) -> Result<ContentId, AppError> {
        let token = self.tokens.get_token().await?;
        let variant = VariantInput {
            language_code: form.language.clone(),
            title: form.title.trim().to_string(),
            body_html: form.body.trim().to_string(),
            is_default_lang: true,
        };

        if let Some(id) = editing {
            self.gateway.upsert_variant(&token, id, &variant).await?;
            return Ok(id);
        }

        let payload = NewContent {
            content_type: form.content_type.clone(),
            region: form.region.clone(),
            category: form.category.clone(),
            tags: form.tag_list().into_vec(),
            priority: form.priority.clone(),
            pinned: false,
            scheduled_publish_at: form.scheduled_publish_at.clone(),
            scheduled_unpublish_at: None,
            internal: form.internal,
        };
        let created = self.gateway.create_content(&token, &payload).await?;

        if let Err(err) = self
            .gateway
            .upsert_variant(&token, created.id, &variant)
            .await
        {
            return Err(self.compensate(&token, created.id, err).await);
        }
        Ok(created.id)
    }

    /// Rolls back a create whose variant could not be attached.
    async fn compensate(&self, token: &str, id: ContentId, cause: AppError) -> AppError {
        warn!("Variant upsert failed for new content {id}, removing it: {cause}");
        match self.gateway.delete_content(token, id).await {
            Ok(()) => {
                info!("Removed incomplete content {id}");
                cause
            }
            Err(cleanup) => {
                error!("Content {id} is orphaned on the server: {cleanup}");
                AppError::OrphanedContent {
                    id: id.value(),
                    message: format!("{cause}; cleanup failed: {cleanup}"),
                }
            }
        }
    }
}

fn submit_message(editing: bool, mode: SubmitMode, id: ContentId) -> String {
    match (editing, mode) {
        (false, SubmitMode::Draft) => format!("Draft saved (ID {id})."),
        (false, SubmitMode::Review) => format!("Submitted for approval (ID {id})."),
        (true, SubmitMode::Draft) => format!("Draft updated (ID {id})."),
        (true, SubmitMode::Review) => format!("Draft updated and submitted for approval (ID {id})."),
    }
}
