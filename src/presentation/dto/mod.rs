pub mod approval_dto;
pub mod content_dto;
pub mod dashboard_dto;
pub mod draft_dto;

use crate::shared::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Envelope printed by `--json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub error_code: Option<String>,
    pub error_details: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            error_code: None,
            error_details: None,
        }
    }

    pub fn from_app_error(error: AppError) -> Self {
        let error_details = match &error {
            AppError::Api { status, .. } => Some(json!({ "status": status })),
            AppError::OrphanedContent { id, .. } => Some(json!({ "content_id": id })),
            _ => None,
        };

        Self {
            success: false,
            data: None,
            error: Some(error.user_message()),
            error_code: Some(error.code().to_string()),
            error_details,
        }
    }

    pub fn from_result(result: crate::shared::Result<T>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::from_app_error(err),
        }
    }
}

/// Inline message shown after a user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<i64>,
}

impl ActionOutcome {
    pub fn new(message: impl Into<String>, content_id: Option<i64>) -> Self {
        Self {
            message: message.into(),
            content_id,
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub(crate) fn check_catalog(field: &str, value: &str, allowed: &[&str]) -> Result<(), String> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "Unsupported {field}: {value} (expected one of {})",
            allowed.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_carries_code_and_orphan_id() {
        let response: ApiResponse<()> = ApiResponse::from_app_error(AppError::OrphanedContent {
            id: 42,
            message: "HTTP 500".into(),
        });
        assert!(!response.success);
        assert_eq!(response.error_code.as_deref(), Some("orphaned_content"));
        assert_eq!(response.error_details, Some(json!({ "content_id": 42 })));
    }

    #[test]
    fn invalid_input_envelope_uses_inline_message() {
        let response: ApiResponse<()> = ApiResponse::from_result(Err(AppError::InvalidInput(
            "Enter a valid content ID.".into(),
        )));
        assert_eq!(response.error.as_deref(), Some("Enter a valid content ID."));
    }
}
