use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Auth(String),
    /// Non-2xx response. `message` is the raw response body, or `HTTP <status>` when empty.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
    #[error("Content {id} was created but could not be completed or removed: {message}")]
    OrphanedContent { id: i64, message: String },
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body
        };
        AppError::Api { status, message }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Auth(_) => "auth",
            AppError::Api { .. } => "api",
            AppError::Network(_) => "network",
            AppError::Storage(_) => "storage",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::ValidationError(_) => "validation",
            AppError::NotFound(_) => "not_found",
            AppError::ConfigurationError(_) => "configuration",
            AppError::SerializationError(_) => "serialization",
            AppError::DeserializationError(_) => "deserialization",
            AppError::OrphanedContent { .. } => "orphaned_content",
            AppError::Internal(_) => "internal",
        }
    }

    /// Message shown inline by the view that triggered the action.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DeserializationError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_surfaces_raw_body() {
        let err = AppError::api(403, "not allowed in this region");
        assert_eq!(err.to_string(), "not allowed in this region");
        assert_eq!(err.code(), "api");
    }

    #[test]
    fn api_error_falls_back_to_status_line() {
        let err = AppError::api(502, "");
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn invalid_input_user_message_has_no_prefix() {
        let err = AppError::InvalidInput("Enter a valid content ID.".to_string());
        assert_eq!(err.user_message(), "Enter a valid content ID.");
    }
}
