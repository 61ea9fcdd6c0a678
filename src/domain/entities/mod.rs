pub mod content;
pub mod draft;
pub mod draft_session;

pub use content::{ContentRecord, ContentView, FeedItem, NewContent, VariantInput};
pub use draft::DraftEntry;
pub use draft_session::{DraftForm, DraftSession, SessionPhase};
