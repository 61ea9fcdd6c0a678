pub mod content_id;
pub mod content_status;
pub mod draft_status;
pub mod tag_list;

pub use content_id::ContentId;
pub use content_status::ContentStatus;
pub use draft_status::DraftStatus;
pub use tag_list::TagList;
