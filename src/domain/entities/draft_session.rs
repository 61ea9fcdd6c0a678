use crate::domain::constants::{
    DEFAULT_CATEGORY, DEFAULT_CONTENT_TYPE, DEFAULT_LANGUAGE, DEFAULT_PRIORITY, DEFAULT_REGION,
};
use crate::domain::entities::draft::DraftEntry;
use crate::domain::value_objects::{ContentId, DraftStatus, TagList};

/// Editable fields of the draft studio form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftForm {
    pub content_type: String,
    pub region: String,
    pub category: String,
    pub priority: String,
    pub tags: String,
    pub internal: bool,
    pub language: String,
    pub title: String,
    pub body: String,
    pub cover_image: Option<String>,
    pub scheduled_publish_at: Option<String>,
}

impl Default for DraftForm {
    fn default() -> Self {
        Self {
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            region: DEFAULT_REGION.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            priority: DEFAULT_PRIORITY.to_string(),
            tags: String::new(),
            internal: false,
            language: DEFAULT_LANGUAGE.to_string(),
            title: String::new(),
            body: String::new(),
            cover_image: None,
            scheduled_publish_at: None,
        }
    }
}

impl DraftForm {
    fn from_entry(entry: &DraftEntry) -> Self {
        let defaults = Self::default();
        Self {
            content_type: or_default(&entry.content_type, defaults.content_type),
            region: or_default(&entry.region, defaults.region),
            category: or_default(&entry.category, defaults.category),
            priority: or_default(&entry.priority, defaults.priority),
            tags: entry.tags.clone(),
            internal: entry.internal,
            language: or_default(&entry.language, defaults.language),
            title: entry.title.clone(),
            body: entry.body.clone(),
            cover_image: entry.cover_image.clone(),
            scheduled_publish_at: entry.scheduled_publish_at.clone(),
        }
    }

    pub fn add_tag(&mut self, tag: &str) {
        let mut tags = TagList::parse(&self.tags);
        tags.add(tag);
        self.tags = tags.joined();
    }

    pub fn tag_list(&self) -> TagList {
        TagList::parse(&self.tags)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() || self.body.trim().is_empty() {
            return Err("Title and body are required.".to_string());
        }
        Ok(())
    }

    /// Builds the local entry persisted after a successful save.
    pub fn to_entry(&self, id: ContentId, status: DraftStatus, created_at: String) -> DraftEntry {
        DraftEntry {
            id,
            title: self.title.trim().to_string(),
            body: self.body.trim().to_string(),
            region: self.region.clone(),
            language: self.language.clone(),
            content_type: self.content_type.clone(),
            category: self.category.clone(),
            priority: self.priority.clone(),
            tags: self.tags.clone(),
            internal: self.internal,
            cover_image: self.cover_image.clone(),
            scheduled_publish_at: self.scheduled_publish_at.clone(),
            status,
            created_at,
        }
    }
}

fn or_default(value: &str, default: String) -> String {
    if value.is_empty() {
        default
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Editing,
    Saving,
    Saved,
    Failed,
}

/// One authoring session in the draft studio.
///
/// `Idle -> Editing -> Saving -> (Saved | Failed)`; any further interaction
/// from a terminal phase returns to `Editing`.
#[derive(Debug, Clone)]
pub struct DraftSession {
    form: DraftForm,
    editing_draft_id: Option<ContentId>,
    phase: SessionPhase,
}

impl Default for DraftSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftSession {
    pub fn new() -> Self {
        Self {
            form: DraftForm::default(),
            editing_draft_id: None,
            phase: SessionPhase::Idle,
        }
    }

    pub fn for_edit(entry: &DraftEntry) -> Self {
        Self {
            form: DraftForm::from_entry(entry),
            editing_draft_id: Some(entry.id),
            phase: SessionPhase::Editing,
        }
    }

    pub fn form(&self) -> &DraftForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut DraftForm {
        self.resume_editing();
        &mut self.form
    }

    pub fn editing_draft_id(&self) -> Option<ContentId> {
        self.editing_draft_id
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn begin_saving(&mut self) -> Result<(), String> {
        self.resume_editing();
        match self.phase {
            SessionPhase::Idle | SessionPhase::Editing => {
                self.phase = SessionPhase::Saving;
                Ok(())
            }
            _ => Err("A save is already in progress".to_string()),
        }
    }

    pub fn finish_saved(&mut self, id: ContentId) {
        if self.editing_draft_id.is_none() {
            // A new record was created; the next save must create another one.
            self.form = DraftForm::default();
        } else {
            self.editing_draft_id = Some(id);
        }
        self.phase = SessionPhase::Saved;
    }

    pub fn finish_failed(&mut self) {
        self.phase = SessionPhase::Failed;
    }

    /// "Clear / New draft".
    pub fn reset(&mut self) {
        self.form = DraftForm::default();
        self.editing_draft_id = None;
        self.phase = SessionPhase::Idle;
    }

    fn resume_editing(&mut self) {
        if matches!(
            self.phase,
            SessionPhase::Idle | SessionPhase::Saved | SessionPhase::Failed
        ) {
            self.phase = SessionPhase::Editing;
        }
    }
}
