use crate::application::ports::ContentGateway;
use crate::domain::entities::{ContentView, DraftEntry, FeedItem};
use crate::domain::value_objects::{ContentId, ContentStatus};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Server payloads that can borrow a cover image from the local draft cache.
pub trait CoverImageCarrier {
    fn content_id(&self) -> ContentId;
    fn cover_image_slot(&mut self) -> &mut Option<String>;
}

impl CoverImageCarrier for FeedItem {
    fn content_id(&self) -> ContentId {
        self.id
    }

    fn cover_image_slot(&mut self) -> &mut Option<String> {
        &mut self.cover_image
    }
}

impl CoverImageCarrier for ContentView {
    fn content_id(&self) -> ContentId {
        self.id
    }

    fn cover_image_slot(&mut self) -> &mut Option<String> {
        &mut self.cover_image
    }
}

/// Server value wins when present and non-empty; otherwise the local one is used.
pub fn merge_cover_image(server: Option<String>, local: Option<&str>) -> Option<String> {
    match server {
        Some(value) if !value.is_empty() => Some(value),
        _ => local.map(str::to_string),
    }
}

pub fn apply_local_cover<T: CoverImageCarrier>(mut item: T, local: Option<&DraftEntry>) -> T {
    let slot = item.cover_image_slot();
    let server = slot.take();
    *slot = merge_cover_image(server, local.and_then(|entry| entry.cover_image.as_deref()));
    item
}

pub fn apply_local_covers<T: CoverImageCarrier>(items: Vec<T>, drafts: &[DraftEntry]) -> Vec<T> {
    let by_id: HashMap<ContentId, &DraftEntry> =
        drafts.iter().map(|entry| (entry.id, entry)).collect();
    items
        .into_iter()
        .map(|item| {
            let local = by_id.get(&item.content_id()).copied();
            apply_local_cover(item, local)
        })
        .collect()
}

/// A local entry annotated with the authoritative status, when it could be fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledDraft {
    pub entry: DraftEntry,
    pub server_status: Option<ContentStatus>,
}

impl ReconciledDraft {
    pub fn local_only(entry: DraftEntry) -> Self {
        Self {
            entry,
            server_status: None,
        }
    }

    /// Pending locally and not known to have moved past review on the server.
    pub fn awaiting_approval(&self) -> bool {
        self.entry.is_pending_approval()
            && !self
                .server_status
                .as_ref()
                .is_some_and(ContentStatus::is_past_review)
    }
}

/// Re-fetches the authoritative status of cached drafts before status-dependent
/// views render them. The local two-valued status is never rewritten.
pub struct StatusReconciler {
    gateway: Arc<dyn ContentGateway>,
}

impl StatusReconciler {
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn reconcile(&self, token: &str, entries: Vec<DraftEntry>) -> Vec<ReconciledDraft> {
        let mut reconciled = Vec::with_capacity(entries.len());
        for entry in entries {
            let server_status = match self
                .gateway
                .fetch_view(token, entry.id, &entry.language)
                .await
            {
                Ok(view) => Some(view.status),
                Err(err) => {
                    warn!("Could not refresh status of content {}: {err}", entry.id);
                    None
                }
            };
            reconciled.push(ReconciledDraft {
                entry,
                server_status,
            });
        }
        reconciled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{draft, view, MockGateway};
    use crate::domain::value_objects::DraftStatus;
    use crate::shared::AppError;

    #[test]
    fn local_cover_fills_null_server_value() {
        assert_eq!(merge_cover_image(None, Some("X")).as_deref(), Some("X"));
    }

    #[test]
    fn server_cover_wins_over_local() {
        assert_eq!(
            merge_cover_image(Some("Y".into()), Some("X")).as_deref(),
            Some("Y")
        );
        assert_eq!(merge_cover_image(Some("Y".into()), None).as_deref(), Some("Y"));
    }

    #[test]
    fn empty_server_cover_counts_as_absent() {
        assert_eq!(
            merge_cover_image(Some(String::new()), Some("X")).as_deref(),
            Some("X")
        );
    }

    #[test]
    fn covers_are_matched_by_id() {
        let mut local = draft(42, DraftStatus::Draft);
        local.cover_image = Some("X".into());
        let mut other = draft(7, DraftStatus::Draft);
        other.cover_image = Some("Z".into());

        let merged = apply_local_covers(
            vec![view(42, ContentStatus::Published), view(8, ContentStatus::Published)],
            &[other, local],
        );

        assert_eq!(merged[0].cover_image.as_deref(), Some("X"));
        assert_eq!(merged[1].cover_image, None);
    }

    #[test]
    fn awaiting_approval_respects_server_status() {
        let pending = draft(1, DraftStatus::PendingApproval);
        assert!(ReconciledDraft::local_only(pending.clone()).awaiting_approval());
        assert!(ReconciledDraft {
            entry: pending.clone(),
            server_status: Some(ContentStatus::Draft),
        }
        .awaiting_approval());
        assert!(!ReconciledDraft {
            entry: pending,
            server_status: Some(ContentStatus::Published),
        }
        .awaiting_approval());
        assert!(!ReconciledDraft::local_only(draft(2, DraftStatus::Draft)).awaiting_approval());
    }

    #[tokio::test]
    async fn reconcile_keeps_local_status_when_fetch_fails() {
        let mut gateway = MockGateway::new();
        gateway.expect_fetch_view().returning(|_, id, _| {
            if id.value() == 1 {
                Ok(view(1, ContentStatus::Published))
            } else {
                Err(AppError::api(404, "content not found"))
            }
        });
        let reconciler = StatusReconciler::new(Arc::new(gateway));

        let result = reconciler
            .reconcile(
                "tok",
                vec![
                    draft(1, DraftStatus::PendingApproval),
                    draft(2, DraftStatus::PendingApproval),
                ],
            )
            .await;

        assert_eq!(result[0].server_status, Some(ContentStatus::Published));
        assert_eq!(result[1].server_status, None);
        assert_eq!(result[1].entry.status, DraftStatus::PendingApproval);
    }
}
