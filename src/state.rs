use crate::application::ports::{ContentGateway, KeyValueStore, TokenProvider};
use crate::application::services::{ApprovalService, DraftService, FeedService};
use crate::infrastructure::http::request::normalize_base_url;
use crate::infrastructure::http::{ContentApiClient, OAuth2TokenClient};
use crate::infrastructure::storage::{FileKeyValueStore, LocalDraftStore};
use crate::presentation::handlers::{
    ApprovalsHandler, ContentHandler, DashboardHandler, FeedHandler, StudioHandler,
};
use crate::shared::config::AppConfig;
use std::sync::Arc;
use tracing::debug;

/// Everything a command needs, built once from the injected configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub draft_store: Arc<LocalDraftStore>,
    pub draft_service: Arc<DraftService>,
    pub approval_service: Arc<ApprovalService>,
    pub feed_service: Arc<FeedService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate().map_err(anyhow::Error::msg)?;
        let base_url = normalize_base_url(&config.api.base_url)?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("content-publisher/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let tokens: Arc<dyn TokenProvider> = Arc::new(OAuth2TokenClient::new(
            client.clone(),
            base_url.clone(),
            &config.auth,
        ));
        let gateway: Arc<dyn ContentGateway> =
            Arc::new(ContentApiClient::new(client, base_url.clone()));

        let storage_dir = config.storage_dir();
        debug!("Local draft store at {:?}", storage_dir);
        let kv: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(storage_dir));

        Ok(Self::with_ports(config, tokens, gateway, kv))
    }

    /// Wires services over explicit ports. Used by `new` and by tests.
    pub fn with_ports(
        config: AppConfig,
        tokens: Arc<dyn TokenProvider>,
        gateway: Arc<dyn ContentGateway>,
        kv: Arc<dyn KeyValueStore>,
    ) -> Self {
        let draft_store = Arc::new(LocalDraftStore::new(kv, config.storage.drafts_key.clone()));
        let draft_service = Arc::new(DraftService::new(
            Arc::clone(&tokens),
            Arc::clone(&gateway),
            Arc::clone(&draft_store),
        ));
        let approval_service = Arc::new(ApprovalService::new(
            Arc::clone(&tokens),
            Arc::clone(&gateway),
            Arc::clone(&draft_store),
            config.workflow.approved_draft_policy,
            config.workflow.reconcile_status,
        ));
        let feed_service = Arc::new(FeedService::new(
            tokens,
            gateway,
            Arc::clone(&draft_store),
        ));

        Self {
            config: Arc::new(config),
            draft_store,
            draft_service,
            approval_service,
            feed_service,
        }
    }

    pub fn studio_handler(&self) -> StudioHandler {
        StudioHandler::new(Arc::clone(&self.draft_service))
    }

    pub fn approvals_handler(&self) -> ApprovalsHandler {
        ApprovalsHandler::new(Arc::clone(&self.approval_service))
    }

    pub fn feed_handler(&self) -> FeedHandler {
        FeedHandler::new(Arc::clone(&self.feed_service))
    }

    pub fn content_handler(&self) -> ContentHandler {
        ContentHandler::new(Arc::clone(&self.feed_service))
    }

    pub fn dashboard_handler(&self) -> DashboardHandler {
        DashboardHandler::new(Arc::clone(&self.draft_service))
    }
}
