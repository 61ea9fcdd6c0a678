pub mod config;
pub mod error;

pub use config::{AppConfig, ApprovedDraftPolicy};
pub use error::{AppError, Result};
