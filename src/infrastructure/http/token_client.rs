use crate::application::ports::TokenProvider;
use crate::infrastructure::http::request::build_url;
use crate::shared::config::AuthConfig;
use crate::shared::error::AppError;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{AUTHORIZATION, CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

const TOKEN_PATH: &str = "/oauth2/token";
const TOKEN_FAILURE: &str = "Failed to get token";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// OAuth2 client-credentials grant. Every call is a fresh round trip.
pub struct OAuth2TokenClient {
    client: Client,
    base_url: String,
    client_id: String,
    client_secret: Option<String>,
    scope: String,
}

impl OAuth2TokenClient {
    pub fn new(client: Client, base_url: impl Into<String>, auth: &AuthConfig) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            client_id: auth.client_id.clone(),
            client_secret: auth.client_secret.clone(),
            scope: auth.scope.clone(),
        }
    }

    fn basic_credentials(&self, secret: &str) -> String {
        let raw = format!("{}:{}", self.client_id, secret);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

#[async_trait]
impl TokenProvider for OAuth2TokenClient {
    async fn get_token(&self) -> Result<String, AppError> {
        let secret = self.client_secret.as_deref().ok_or_else(|| {
            AppError::ConfigurationError(
                "client secret is not configured (set CONTENT_PUBLISHER_CLIENT_SECRET)".to_string(),
            )
        })?;
        let url = build_url(&self.base_url, TOKEN_PATH);
        debug!("Requesting token from {url}");

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, self.basic_credentials(secret))
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .form(&[
                ("grant_type", "client_credentials"),
                ("scope", self.scope.as_str()),
            ])
            .send()
            .await
            .map_err(|err| {
                warn!("Token request failed: {err}");
                AppError::Auth(TOKEN_FAILURE.to_string())
            })?;

        if !response.status().is_success() {
            warn!("Token endpoint responded with {}", response.status());
            return Err(AppError::Auth(TOKEN_FAILURE.to_string()));
        }

        let body: TokenResponse = response.json().await.map_err(|err| {
            warn!("Token response could not be decoded: {err}");
            AppError::Auth(TOKEN_FAILURE.to_string())
        })?;
        Ok(body.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_credentials_encode_id_and_secret() {
        let auth = AuthConfig {
            client_id: "content-platform-client".into(),
            client_secret: Some("secret".into()),
            scope: "content.read content.write".into(),
        };
        let client = OAuth2TokenClient::new(Client::new(), "http://localhost:8080", &auth);
        assert_eq!(
            client.basic_credentials("secret"),
            "Basic Y29udGVudC1wbGF0Zm9ybS1jbGllbnQ6c2VjcmV0"
        );
    }

    #[tokio::test]
    async fn missing_secret_is_a_configuration_error() {
        let auth = AuthConfig {
            client_id: "id".into(),
            client_secret: None,
            scope: "s".into(),
        };
        let client = OAuth2TokenClient::new(Client::new(), "http://127.0.0.1:9", &auth);
        let err = client.get_token().await.unwrap_err();
        assert_eq!(err.code(), "configuration");
    }
}
