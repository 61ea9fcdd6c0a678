use crate::domain::entities::{ContentRecord, ContentView, FeedItem, NewContent, VariantInput};
use crate::domain::value_objects::ContentId;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Content API operations consumed by the views.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    async fn create_content(
        &self,
        token: &str,
        payload: &NewContent,
    ) -> Result<ContentRecord, AppError>;

    async fn upsert_variant(
        &self,
        token: &str,
        id: ContentId,
        payload: &VariantInput,
    ) -> Result<serde_json::Value, AppError>;

    async fn publish_content(&self, token: &str, id: ContentId) -> Result<ContentRecord, AppError>;

    /// Compensating action for a create whose variant could not be attached.
    async fn delete_content(&self, token: &str, id: ContentId) -> Result<(), AppError>;

    async fn fetch_feed(
        &self,
        token: &str,
        region: &str,
        lang: &str,
    ) -> Result<Vec<FeedItem>, AppError>;

    async fn fetch_view(
        &self,
        token: &str,
        id: ContentId,
        lang: &str,
    ) -> Result<ContentView, AppError>;
}
