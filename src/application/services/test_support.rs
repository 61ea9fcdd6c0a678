use crate::application::ports::{ContentGateway, TokenProvider};
use crate::domain::entities::{
    ContentRecord, ContentView, DraftEntry, FeedItem, NewContent, VariantInput,
};
use crate::domain::value_objects::{ContentId, ContentStatus, DraftStatus};
use crate::infrastructure::storage::{LocalDraftStore, MemoryKeyValueStore};
use crate::shared::error::AppError;
use async_trait::async_trait;
use mockall::mock;
use std::sync::Arc;

mock! {
    pub Tokens {}

    #[async_trait]
    impl TokenProvider for Tokens {
        async fn get_token(&self) -> Result<String, AppError>;
    }
}

mock! {
    pub Gateway {}

    #[async_trait]
    impl ContentGateway for Gateway {
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
}

pub fn tokens_ok() -> MockTokens {
    let mut tokens = MockTokens::new();
    tokens
        .expect_get_token()
        .returning(|| Ok("test-token".to_string()));
    tokens
}

pub fn tokens_failing() -> MockTokens {
    let mut tokens = MockTokens::new();
    tokens
        .expect_get_token()
        .returning(|| Err(AppError::Auth("Failed to get token".to_string())));
    tokens
}

pub fn id(value: i64) -> ContentId {
    ContentId::new(value).expect("positive id")
}

pub fn memory_store() -> Arc<LocalDraftStore> {
    Arc::new(LocalDraftStore::new(
        Arc::new(MemoryKeyValueStore::new()),
        "rb_drafts",
    ))
}

pub fn draft(value: i64, status: DraftStatus) -> DraftEntry {
    DraftEntry {
        id: id(value),
        title: format!("Draft {value}"),
        body: "<p>body</p>".to_string(),
        region: "US".to_string(),
        language: "en".to_string(),
        content_type: "ARTICLE".to_string(),
        category: "TRADES".to_string(),
        priority: "NORMAL".to_string(),
        tags: "markets".to_string(),
        internal: false,
        cover_image: None,
        scheduled_publish_at: None,
        status,
        created_at: "2025-03-01T09:00:00.000Z".to_string(),
    }
}

pub fn record(value: i64, status: ContentStatus) -> ContentRecord {
    ContentRecord {
        id: id(value),
        region: "US".to_string(),
        category: "TRADES".to_string(),
        status: Some(status),
    }
}

pub fn feed_item(value: i64, title: &str, status: ContentStatus) -> FeedItem {
    FeedItem {
        id: id(value),
        content_type: "ARTICLE".to_string(),
        region: "US".to_string(),
        category: "TRADES".to_string(),
        tags: vec!["markets".to_string()],
        priority: "NORMAL".to_string(),
        pinned: false,
        status,
        published_at: Some("2025-02-01T10:00:00Z".to_string()),
        scheduled_unpublish_at: None,
        display_language: "en".to_string(),
        available_languages: vec!["en".to_string()],
        title: title.to_string(),
        created_by: Some("author".to_string()),
        created_at: Some("2025-01-30T10:00:00Z".to_string()),
        approved_by: None,
        approved_at: None,
        version: 1,
        internal: false,
        cover_image: None,
    }
}

pub fn view(value: i64, status: ContentStatus) -> ContentView {
    ContentView {
        id: id(value),
        content_type: "ARTICLE".to_string(),
        region: "US".to_string(),
        category: "TRADES".to_string(),
        tags: vec!["markets".to_string()],
        priority: "NORMAL".to_string(),
        status,
        published_at: None,
        selected_language: "en".to_string(),
        available_languages: vec!["en".to_string()],
        title: format!("Content {value}"),
        body_html: "<p>body</p>".to_string(),
        created_by: Some("author".to_string()),
        created_at: Some("2025-01-30T10:00:00Z".to_string()),
        approved_by: None,
        approved_at: None,
        version: 1,
        internal: false,
        cover_image: None,
    }
}
