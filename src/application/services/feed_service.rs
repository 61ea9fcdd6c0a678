use super::reconcile::{apply_local_cover, apply_local_covers};
use crate::application::ports::{ContentGateway, TokenProvider};
use crate::domain::entities::{ContentView, FeedItem};
use crate::domain::value_objects::{ContentId, ContentStatus};
use crate::infrastructure::storage::LocalDraftStore;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::debug;

/// Read side: the published feed and the single-content view.
pub struct FeedService {
    tokens: Arc<dyn TokenProvider>,
    gateway: Arc<dyn ContentGateway>,
    store: Arc<LocalDraftStore>,
}

impl FeedService {
    pub fn new(
        tokens: Arc<dyn TokenProvider>,
        gateway: Arc<dyn ContentGateway>,
        store: Arc<LocalDraftStore>,
    ) -> Self {
        Self {
            tokens,
            gateway,
            store,
        }
    }

    pub async fn published(
        &self,
        region: &str,
        lang: &str,
        query: Option<&str>,
    ) -> Result<Vec<FeedItem>, AppError> {
        let token = self.tokens.get_token().await?;
        let items = self.gateway.fetch_feed(&token, region, lang).await?;
        let drafts = self.store.load().await;
        let fetched = items.len();
        let visible = filter_published(apply_local_covers(items, &drafts), query);
        debug!(
            "Feed {region}/{lang}: {} of {fetched} items visible",
            visible.len()
        );
        Ok(visible)
    }

    /// Any status is viewable, not only published content.
    pub async fn view(&self, id: ContentId, lang: &str) -> Result<ContentView, AppError> {
        let token = self.tokens.get_token().await?;
        let view = self.gateway.fetch_view(&token, id, lang).await?;
        let local = self.store.find(id).await;
        Ok(apply_local_cover(view, local.as_ref()))
    }
}

/// Keeps published items whose title contains `query`, ignoring case.
pub fn filter_published(items: Vec<FeedItem>, query: Option<&str>) -> Vec<FeedItem> {
    let needle = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);
    items
        .into_iter()
        .filter(|item| item.status == ContentStatus::Published)
        .filter(|item| match &needle {
            Some(needle) => item.title.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect()
}
