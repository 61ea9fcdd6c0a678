use crate::domain::value_objects::{ContentId, DraftStatus};
use serde::{Deserialize, Serialize};

/// Client-local metadata for content the current user drafted.
///
/// The authoritative record lives on the server; this copy is kept so the
/// studio and approvals views can render without a listing endpoint and so
/// client-only fields (the cover image) survive between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftEntry {
    pub id: ContentId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: String,
    /// Comma-joined, exactly as typed in the studio.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub internal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_publish_at: Option<String>,
    #[serde(default)]
    pub status: DraftStatus,
    /// Client clock at save time, not the server's creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

impl DraftEntry {
    pub fn is_pending_approval(&self) -> bool {
        self.status == DraftStatus::PendingApproval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_entries_written_by_older_views() {
        let raw = r#"{"id":3,"title":"Rates","region":"JP","language":"ja","status":"PENDING_APPROVAL","createdAt":"2025-03-01T09:00:00.000Z"}"#;
        let entry: DraftEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.id.value(), 3);
        assert!(entry.is_pending_approval());
        assert!(entry.body.is_empty());
        assert!(entry.cover_image.is_none());
    }

    #[test]
    fn encodes_camel_case_and_omits_absent_options() {
        let entry = DraftEntry {
            id: ContentId::new(9).unwrap(),
            title: "T".into(),
            body: "<p>B</p>".into(),
            region: "US".into(),
            language: "en".into(),
            content_type: "ARTICLE".into(),
            category: "TRADES".into(),
            priority: "NORMAL".into(),
            tags: "markets".into(),
            internal: false,
            cover_image: None,
            scheduled_publish_at: None,
            status: DraftStatus::Draft,
            created_at: "2025-03-01T09:00:00.000Z".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["contentType"], "ARTICLE");
        assert_eq!(json["status"], "DRAFT");
        assert!(json.get("coverImage").is_none());
    }
}
