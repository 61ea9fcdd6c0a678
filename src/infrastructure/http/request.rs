use crate::shared::error::AppError;
use reqwest::Url;
use serde::de::DeserializeOwned;

pub fn normalize_base_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim().trim_end_matches('/').to_string();
    let url = Url::parse(&trimmed)
        .map_err(|err| AppError::ConfigurationError(format!("Invalid URL: {err}")))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed),
        _ => Err(AppError::ConfigurationError(
            "URL scheme must be http or https".to_string(),
        )),
    }
}

pub fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Sends the request and decodes a JSON body.
///
/// Non-2xx responses become [`AppError::Api`] carrying the raw body text. An
/// empty 2xx body decodes as JSON `null`.
pub async fn request_json<T: DeserializeOwned>(
    builder: reqwest::RequestBuilder,
) -> Result<T, AppError> {
    let response = builder
        .send()
        .await
        .map_err(|err| AppError::Network(err.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| AppError::Network(err.to_string()))?;
    if !status.is_success() {
        return Err(AppError::api(status.as_u16(), body));
    }
    let body = if body.trim().is_empty() {
        "null"
    } else {
        body.as_str()
    };
    serde_json::from_str(body).map_err(|err| AppError::DeserializationError(err.to_string()))
}
