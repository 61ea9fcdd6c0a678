use crate::domain::value_objects::{ContentId, ContentStatus};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/content`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContent {
    pub content_type: String,
    pub region: String,
    pub category: String,
    pub tags: Vec<String>,
    pub priority: String,
    pub pinned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_publish_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_unpublish_at: Option<String>,
    pub internal: bool,
}

/// Body of `PUT /api/v1/content/{id}/variants`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantInput {
    pub language_code: String,
    pub title: String,
    pub body_html: String,
    pub is_default_lang: bool,
}

/// Content record as returned by create and publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: ContentId,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: Option<ContentStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: ContentId,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub pinned: bool,
    pub status: ContentStatus,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub scheduled_unpublish_at: Option<String>,
    #[serde(default)]
    pub display_language: String,
    #[serde(default)]
    pub available_languages: Vec<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub approved_at: Option<String>,
    #[serde(default)]
    pub version: i32,
    #[serde(default)]
    pub internal: bool,
    #[serde(default)]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentView {
    pub id: ContentId,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub priority: String,
    pub status: ContentStatus,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub selected_language: String,
    #[serde(default)]
    pub available_languages: Vec<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body_html: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub approved_at: Option<String>,
    #[serde(default)]
    pub version: i32,
    #[serde(default)]
    pub internal: bool,
    #[serde(default)]
    pub cover_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_content_omits_unset_schedule() {
        let payload = NewContent {
            content_type: "ARTICLE".into(),
            region: "US".into(),
            category: "TRADES".into(),
            tags: vec!["markets".into()],
            priority: "NORMAL".into(),
            pinned: false,
            scheduled_publish_at: None,
            scheduled_unpublish_at: None,
            internal: false,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["contentType"], "ARTICLE");
        assert!(json.get("scheduledPublishAt").is_none());
    }

    #[test]
    fn feed_item_tolerates_null_cover_and_extra_fields() {
        let raw = r#"{
            "id": 5, "contentType": "ARTICLE", "region": "US", "category": "TRADES",
            "tags": ["markets"], "priority": "HIGH", "pinned": true, "status": "PUBLISHED",
            "publishedAt": "2025-02-01T10:00:00Z", "scheduledUnpublishAt": null,
            "displayLanguage": "en", "availableLanguages": ["en", "ja"], "title": "Open",
            "createdBy": "author", "createdAt": "2025-01-30T10:00:00Z", "approvedBy": null,
            "approvedAt": null, "version": 2, "internal": false, "coverImage": null,
            "lastModifiedBy": "someone"
        }"#;
        let item: FeedItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.status, ContentStatus::Published);
        assert!(item.cover_image.is_none());
        assert_eq!(item.available_languages.len(), 2);
    }
}
