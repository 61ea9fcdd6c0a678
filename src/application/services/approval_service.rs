use super::reconcile::{ReconciledDraft, StatusReconciler};
use crate::application::ports::{ContentGateway, TokenProvider};
use crate::domain::entities::{ContentRecord, DraftEntry};
use crate::domain::value_objects::ContentId;
use crate::infrastructure::storage::LocalDraftStore;
use crate::shared::config::ApprovedDraftPolicy;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ApprovalOutcome {
    pub id: ContentId,
    pub record: ContentRecord,
    pub entries: Vec<DraftEntry>,
    pub message: String,
}

pub struct ApprovalService {
    tokens: Arc<dyn TokenProvider>,
    gateway: Arc<dyn ContentGateway>,
    store: Arc<LocalDraftStore>,
    reconciler: StatusReconciler,
    policy: ApprovedDraftPolicy,
    reconcile_status: bool,
}

impl ApprovalService {
    pub fn new(
        tokens: Arc<dyn TokenProvider>,
        gateway: Arc<dyn ContentGateway>,
        store: Arc<LocalDraftStore>,
        policy: ApprovedDraftPolicy,
        reconcile_status: bool,
    ) -> Self {
        let reconciler = StatusReconciler::new(Arc::clone(&gateway));
        Self {
            tokens,
            gateway,
            store,
            reconciler,
            policy,
            reconcile_status,
        }
    }

    /// Local entries awaiting approval.
    ///
    /// With reconciliation enabled, entries the server already reports as
    /// approved, published or archived are left out. When no token can be
    /// obtained the local list is shown as is.
    pub async fn pending(&self) -> Vec<ReconciledDraft> {
        let pending: Vec<DraftEntry> = self
            .store
            .load()
            .await
            .into_iter()
            .filter(DraftEntry::is_pending_approval)
            .collect();

        if !self.reconcile_status || pending.is_empty() {
            return pending.into_iter().map(ReconciledDraft::local_only).collect();
        }

        let token = match self.tokens.get_token().await {
            Ok(token) => token,
            Err(err) => {
                warn!("Showing unreconciled approvals: {err}");
                return pending.into_iter().map(ReconciledDraft::local_only).collect();
            }
        };

        self.reconciler
            .reconcile(&token, pending)
            .await
            .into_iter()
            .filter(ReconciledDraft::awaiting_approval)
            .collect()
    }

    /// Publishes `id`, then applies the approved-draft policy to the local entry.
    pub async fn approve(&self, id: ContentId) -> Result<ApprovalOutcome, AppError> {
        let token = self.tokens.get_token().await?;
        let record = self.gateway.publish_content(&token, id).await?;

        let snapshot = self.store.load().await;
        let entries = match self.policy {
            ApprovedDraftPolicy::Remove => self.store.delete_local(snapshot, id).await?,
            ApprovedDraftPolicy::Retain => snapshot,
        };

        let message = format!("Approved and published (ID {id}).");
        info!("{message}");
        Ok(ApprovalOutcome {
            id,
            record,
            entries,
            message,
        })
    }

    /// Approves an id typed by hand; it does not need to be in the local store.
    pub async fn approve_manual(&self, raw: &str) -> Result<ApprovalOutcome, AppError> {
        let id = raw
            .parse::<ContentId>()
            .map_err(|_| AppError::InvalidInput("Enter a valid content ID.".to_string()))?;
        self.approve(id).await
    }
}
