use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Lifecycle status as reported by the content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentStatus {
    Draft,
    InReview,
    Approved,
    Published,
    Archived,
    Unknown(String),
}

impl ContentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ContentStatus::Draft => "DRAFT",
            ContentStatus::InReview => "IN_REVIEW",
            ContentStatus::Approved => "APPROVED",
            ContentStatus::Published => "PUBLISHED",
            ContentStatus::Archived => "ARCHIVED",
            ContentStatus::Unknown(value) => value.as_str(),
        }
    }

    /// The record has left the authoring stage and no longer awaits approval.
    pub fn is_past_review(&self) -> bool {
        matches!(
            self,
            ContentStatus::Approved | ContentStatus::Published | ContentStatus::Archived
        )
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ContentStatus {
    fn from(value: &str) -> Self {
        match value {
            "DRAFT" => ContentStatus::Draft,
            "IN_REVIEW" => ContentStatus::InReview,
            "APPROVED" => ContentStatus::Approved,
            "PUBLISHED" => ContentStatus::Published,
            "ARCHIVED" => ContentStatus::Archived,
            other => ContentStatus::Unknown(other.to_string()),
        }
    }
}

impl Serialize for ContentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ContentStatus::from(raw.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_statuses_survive_round_trip() {
        let status: ContentStatus = serde_json::from_str("\"SCHEDULED\"").unwrap();
        assert_eq!(status, ContentStatus::Unknown("SCHEDULED".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"SCHEDULED\"");
    }

    #[test]
    fn past_review_covers_terminal_states() {
        assert!(ContentStatus::Published.is_past_review());
        assert!(ContentStatus::Approved.is_past_review());
        assert!(ContentStatus::Archived.is_past_review());
        assert!(!ContentStatus::Draft.is_past_review());
        assert!(!ContentStatus::InReview.is_past_review());
    }
}
