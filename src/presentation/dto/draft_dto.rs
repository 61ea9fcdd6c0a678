use super::{check_catalog, Validate};
use crate::domain::constants::{CONTENT_TYPES, LANGUAGES, PRIORITIES, REGIONS, SUGGESTED_TAGS};
use crate::domain::entities::{DraftEntry, DraftForm};
use crate::domain::value_objects::ContentStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DraftRowResponse {
    pub id: i64,
    pub title: String,
    pub region: String,
    pub language: String,
    pub status: String,
    pub server_status: Option<String>,
    pub created_at: String,
    pub cover_image: Option<String>,
}

impl DraftRowResponse {
    pub fn from_entry(entry: DraftEntry, server_status: Option<ContentStatus>) -> Self {
        Self {
            id: entry.id.value(),
            title: entry.title,
            region: entry.region,
            language: entry.language,
            status: entry.status.as_str().to_string(),
            server_status: server_status.map(|status| status.as_str().to_string()),
            created_at: entry.created_at,
            cover_image: entry.cover_image,
        }
    }
}

/// Studio form input. Absent fields keep the value already in the form
/// (defaults for a new draft, the cached entry when editing).
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SubmitDraftRequest {
    pub edit_id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub content_type: Option<String>,
    pub region: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub tags: Option<String>,
    #[serde(default)]
    pub add_tags: Vec<String>,
    pub language: Option<String>,
    pub internal: Option<bool>,
    pub cover_image: Option<String>,
    pub scheduled_publish_at: Option<String>,
}

impl SubmitDraftRequest {
    pub fn apply_to(self, form: &mut DraftForm) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(body) = self.body {
            form.body = body;
        }
        if let Some(content_type) = self.content_type {
            form.content_type = content_type;
        }
        if let Some(region) = self.region {
            form.region = region;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
        if let Some(priority) = self.priority {
            form.priority = priority;
        }
        if let Some(tags) = self.tags {
            form.tags = tags;
        }
        for tag in &self.add_tags {
            form.add_tag(tag);
        }
        if let Some(language) = self.language {
            form.language = language;
        }
        if let Some(internal) = self.internal {
            form.internal = internal;
        }
        if let Some(cover) = self.cover_image {
            form.cover_image = Some(cover).filter(|c| !c.is_empty());
        }
        if let Some(at) = self.scheduled_publish_at {
            form.scheduled_publish_at = Some(at).filter(|a| !a.is_empty());
        }
    }
}

impl Validate for SubmitDraftRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(content_type) = &self.content_type {
            check_catalog("content type", content_type, &CONTENT_TYPES)?;
        }
        if let Some(region) = &self.region {
            check_catalog("region", region, &REGIONS)?;
        }
        if let Some(language) = &self.language {
            check_catalog("language", language, &LANGUAGES)?;
        }
        if let Some(priority) = &self.priority {
            check_catalog("priority", priority, &PRIORITIES)?;
        }
        for tag in &self.add_tags {
            check_catalog("suggested tag", tag, &SUGGESTED_TAGS)?;
        }
        if let Some(category) = &self.category {
            if category.trim().is_empty() {
                return Err("Category must not be empty".to_string());
            }
        }
        if let Some(cover) = &self.cover_image {
            let supported = cover.is_empty()
                || cover.starts_with("http://")
                || cover.starts_with("https://")
                || cover.starts_with("data:");
            if !supported {
                return Err("Cover image must be an http(s) URL or a data URL".to_string());
            }
        }
        if let Some(at) = &self.scheduled_publish_at {
            if !at.is_empty() && chrono::DateTime::parse_from_rfc3339(at).is_err() {
                return Err(format!("Invalid publish time (expected RFC 3339): {at}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_keep_form_values() {
        let mut form = DraftForm::default();
        form.title = "Kept".into();
        form.tags = "markets".into();
        SubmitDraftRequest {
            body: Some("<p>new</p>".into()),
            add_tags: vec!["risk".into()],
            ..Default::default()
        }
        .apply_to(&mut form);

        assert_eq!(form.title, "Kept");
        assert_eq!(form.body, "<p>new</p>");
        assert_eq!(form.tags, "markets, risk");
        assert_eq!(form.region, "US");
    }

    #[test]
    fn empty_cover_clears_it() {
        let mut form = DraftForm::default();
        form.cover_image = Some("https://cdn.example.com/a.png".into());
        SubmitDraftRequest {
            cover_image: Some(String::new()),
            ..Default::default()
        }
        .apply_to(&mut form);
        assert!(form.cover_image.is_none());
    }

    #[test]
    fn validation_checks_catalogs_and_schedule() {
        let ok = SubmitDraftRequest {
            region: Some("JP".into()),
            language: Some("ja".into()),
            scheduled_publish_at: Some("2025-06-01T09:00:00Z".into()),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());

        let bad_region = SubmitDraftRequest {
            region: Some("DE".into()),
            ..Default::default()
        };
        assert!(bad_region.validate().unwrap_err().contains("region"));

        let bad_time = SubmitDraftRequest {
            scheduled_publish_at: Some("tomorrow".into()),
            ..Default::default()
        };
        assert!(bad_time.validate().is_err());

        let bad_chip = SubmitDraftRequest {
            add_tags: vec!["risk".into(), "gossip".into()],
            ..Default::default()
        };
        assert!(bad_chip.validate().unwrap_err().contains("suggested tag"));

        let bad_cover = SubmitDraftRequest {
            cover_image: Some("ftp://host/a.png".into()),
            ..Default::default()
        };
        assert!(bad_cover.validate().is_err());
    }
}
