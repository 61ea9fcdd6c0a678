pub mod approvals_handler;
pub mod content_handler;
pub mod dashboard_handler;
pub mod feed_handler;
pub mod studio_handler;

pub use approvals_handler::ApprovalsHandler;
pub use content_handler::ContentHandler;
pub use dashboard_handler::DashboardHandler;
pub use feed_handler::FeedHandler;
pub use studio_handler::StudioHandler;
