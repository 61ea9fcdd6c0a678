use crate::{
    application::services::DraftService,
    presentation::dto::dashboard_dto::{DashboardResponse, WorkspaceLink},
};
use std::sync::Arc;

/// Landing hub. Counts come from the local store only, so it works offline.
pub struct DashboardHandler {
    draft_service: Arc<DraftService>,
}

impl DashboardHandler {
    pub fn new(draft_service: Arc<DraftService>) -> Self {
        Self { draft_service }
    }

    pub async fn overview(&self) -> DashboardResponse {
        let drafts = self.draft_service.list().await;
        let pending_approvals = drafts
            .iter()
            .filter(|entry| entry.is_pending_approval())
            .count();

        DashboardResponse {
            workspaces: workspaces(),
            local_drafts: drafts.len(),
            pending_approvals,
        }
    }
}

fn workspaces() -> Vec<WorkspaceLink> {
    vec![
        WorkspaceLink {
            name: "Published Content".to_string(),
            description: "Browse published content by region and language".to_string(),
            command: "feed".to_string(),
        },
        WorkspaceLink {
            name: "Content Dashboard".to_string(),
            description: "Create, edit and submit drafts for approval".to_string(),
            command: "drafts list".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::KeyValueStore;
    use crate::application::services::test_support::{MockGateway, MockTokens};
    use crate::infrastructure::storage::{LocalDraftStore, MemoryKeyValueStore};

    #[tokio::test]
    async fn overview_counts_local_entries_without_network() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        kv.store(
            "rb_drafts",
            r#"[{"id":1,"status":"DRAFT"},{"id":2,"status":"PENDING_APPROVAL"}]"#,
        )
        .await
        .unwrap();
        let store = Arc::new(LocalDraftStore::new(kv, "rb_drafts"));
        let mut tokens = MockTokens::new();
        tokens.expect_get_token().never();
        let mut gateway = MockGateway::new();
        gateway.expect_fetch_view().never();
        let service = DraftService::new(Arc::new(tokens), Arc::new(gateway), store);

        let overview = DashboardHandler::new(Arc::new(service)).overview().await;

        assert_eq!(overview.workspaces.len(), 2);
        assert_eq!(overview.workspaces[0].command, "feed");
        assert_eq!(overview.local_drafts, 2);
        assert_eq!(overview.pending_approvals, 1);
    }
}
