use crate::application::ports::KeyValueStore;
use crate::domain::entities::DraftEntry;
use crate::domain::value_objects::ContentId;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Local draft cache persisted as one JSON array under a single key.
///
/// Every mutation rewrites the whole sequence; there is no fine-grained
/// patching and no coordination between processes sharing the key.
pub struct LocalDraftStore {
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl LocalDraftStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Never fails: a missing, unreadable or corrupted blob reads as empty.
    /// Individual entries that do not decode are skipped; the rest are kept.
    pub async fn load(&self) -> Vec<DraftEntry> {
        let raw = match self.storage.retrieve(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("Draft cache unreadable, treating as empty: {err}");
                return Vec::new();
            }
        };
        let values = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(values) => values,
            Err(err) => {
                warn!("Draft cache corrupted, treating as empty: {err}");
                return Vec::new();
            }
        };
        let total = values.len();
        let entries: Vec<DraftEntry> = values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<DraftEntry>(value) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!("Skipping undecodable draft entry: {err}");
                    None
                }
            })
            .collect();
        if entries.len() < total {
            warn!(
                "Dropped {} of {total} draft entries that could not be decoded",
                total - entries.len()
            );
        }
        entries
    }

    pub async fn save(&self, entries: &[DraftEntry]) -> Result<(), AppError> {
        let json = serde_json::to_string(entries)
            .map_err(|err| AppError::SerializationError(err.to_string()))?;
        self.storage.store(&self.key, &json).await?;
        debug!("Saved {} draft entries", entries.len());
        Ok(())
    }

    /// Replaces the entry with the same id in `entries`, or prepends it, then
    /// persists the result.
    pub async fn upsert_local(
        &self,
        entries: Vec<DraftEntry>,
        entry: DraftEntry,
    ) -> Result<Vec<DraftEntry>, AppError> {
        let next = upserted(entries, entry);
        self.save(&next).await?;
        Ok(next)
    }

    /// Drops `id` from `entries` and persists the result. The server record is untouched.
    pub async fn delete_local(
        &self,
        entries: Vec<DraftEntry>,
        id: ContentId,
    ) -> Result<Vec<DraftEntry>, AppError> {
        let next = without(entries, id);
        self.save(&next).await?;
        Ok(next)
    }

    pub async fn find(&self, id: ContentId) -> Option<DraftEntry> {
        self.load().await.into_iter().find(|entry| entry.id == id)
    }
}

pub fn upserted(mut entries: Vec<DraftEntry>, entry: DraftEntry) -> Vec<DraftEntry> {
    if let Some(existing) = entries.iter_mut().find(|existing| existing.id == entry.id) {
        *existing = entry;
    } else {
        entries.insert(0, entry);
    }
    entries
}

pub fn without(entries: Vec<DraftEntry>, id: ContentId) -> Vec<DraftEntry> {
    entries.into_iter().filter(|entry| entry.id != id).collect()
}
