use super::{check_catalog, Validate};
use crate::domain::constants::{LANGUAGES, REGIONS};
use crate::domain::entities::{ContentView, FeedItem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FeedRequest {
    pub region: String,
    pub lang: String,
    pub query: Option<String>,
}

impl Validate for FeedRequest {
    fn validate(&self) -> Result<(), String> {
        check_catalog("region", &self.region, &REGIONS)?;
        check_catalog("language", &self.lang, &LANGUAGES)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FeedCardResponse {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub region: String,
    pub display_language: String,
    pub priority: String,
    pub pinned: bool,
    pub tags: Vec<String>,
    pub published_at: Option<String>,
    pub cover_image: Option<String>,
}

impl From<FeedItem> for FeedCardResponse {
    fn from(item: FeedItem) -> Self {
        Self {
            id: item.id.value(),
            title: item.title,
            category: item.category,
            region: item.region,
            display_language: item.display_language,
            priority: item.priority,
            pinned: item.pinned,
            tags: item.tags,
            published_at: item.published_at,
            cover_image: item.cover_image,
        }
    }
}

/// Published feed as shown on the landing view.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FeedResponse {
    pub region: String,
    pub lang: String,
    pub total: usize,
    pub items: Vec<FeedCardResponse>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ViewContentRequest {
    pub id: String,
    pub lang: String,
}

impl Validate for ViewContentRequest {
    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Content id is required".to_string());
        }
        check_catalog("language", &self.lang, &LANGUAGES)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ContentDetailResponse {
    pub id: i64,
    pub title: String,
    pub body_html: String,
    pub status: String,
    pub content_type: String,
    pub region: String,
    pub category: String,
    pub priority: String,
    pub tags: Vec<String>,
    pub selected_language: String,
    pub available_languages: Vec<String>,
    pub published_at: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
    pub approved_by: Option<String>,
    pub approved_at: Option<String>,
    pub version: i32,
    pub internal: bool,
    pub cover_image: Option<String>,
}

impl From<ContentView> for ContentDetailResponse {
    fn from(view: ContentView) -> Self {
        Self {
            id: view.id.value(),
            title: view.title,
            body_html: view.body_html,
            status: view.status.as_str().to_string(),
            content_type: view.content_type,
            region: view.region,
            category: view.category,
            priority: view.priority,
            tags: view.tags,
            selected_language: view.selected_language,
            available_languages: view.available_languages,
            published_at: view.published_at,
            created_by: view.created_by,
            created_at: view.created_at,
            approved_by: view.approved_by,
            approved_at: view.approved_at,
            version: view.version,
            internal: view.internal,
            cover_image: view.cover_image,
        }
    }
}
