pub mod constants;
pub mod entities;
pub mod value_objects;

pub use entities::{ContentView, DraftEntry, DraftSession, FeedItem};
pub use value_objects::{ContentId, ContentStatus, DraftStatus};
