use crate::application::services::ReconciledDraft;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PendingApprovalResponse {
    pub id: i64,
    pub title: String,
    pub region: String,
    pub language: String,
    pub created_at: String,
    pub server_status: Option<String>,
}

impl From<ReconciledDraft> for PendingApprovalResponse {
    fn from(draft: ReconciledDraft) -> Self {
        Self {
            id: draft.entry.id.value(),
            title: draft.entry.title,
            region: draft.entry.region,
            language: draft.entry.language,
            created_at: draft.entry.created_at,
            server_status: draft.server_status.map(|status| status.as_str().to_string()),
        }
    }
}
