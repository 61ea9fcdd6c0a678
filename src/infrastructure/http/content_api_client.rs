use crate::application::ports::ContentGateway;
use crate::domain::entities::{ContentRecord, ContentView, FeedItem, NewContent, VariantInput};
use crate::domain::value_objects::ContentId;
use crate::infrastructure::http::request::{build_url, request_json};
use crate::shared::error::AppError;
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use reqwest::{Client, Method, RequestBuilder};
use tracing::debug;

/// Bearer-authenticated client for `/api/v1`.
pub struct ContentApiClient {
    client: Client,
    base_url: String,
}

impl ContentApiClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn authorized_request(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        let url = build_url(&self.base_url, path);
        debug!("{method} {url}");
        self.client
            .request(method, url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
    }
}

#[async_trait]
impl ContentGateway for ContentApiClient {
    async fn create_content(
        &self,
        token: &str,
        payload: &NewContent,
    ) -> Result<ContentRecord, AppError> {
        let builder = self
            .authorized_request(Method::POST, "/api/v1/content", token)
            .json(payload);
        request_json(builder).await
    }

    async fn upsert_variant(
        &self,
        token: &str,
        id: ContentId,
        payload: &VariantInput,
    ) -> Result<serde_json::Value, AppError> {
        let path = format!("/api/v1/content/{id}/variants");
        let builder = self
            .authorized_request(Method::PUT, &path, token)
            .json(payload);
        request_json(builder).await
    }

    async fn publish_content(&self, token: &str, id: ContentId) -> Result<ContentRecord, AppError> {
        let path = format!("/api/v1/content/{id}/publish");
        let builder = self.authorized_request(Method::POST, &path, token);
        request_json(builder).await
    }

    async fn delete_content(&self, token: &str, id: ContentId) -> Result<(), AppError> {
        let path = format!("/api/v1/content/{id}");
        let builder = self.authorized_request(Method::DELETE, &path, token);
        let _: serde_json::Value = request_json(builder).await?;
        Ok(())
    }

    async fn fetch_feed(
        &self,
        token: &str,
        region: &str,
        lang: &str,
    ) -> Result<Vec<FeedItem>, AppError> {
        let builder = self
            .authorized_request(Method::GET, "/api/v1/feed", token)
            .query(&[("region", region), ("lang", lang)]);
        request_json(builder).await
    }

    async fn fetch_view(
        &self,
        token: &str,
        id: ContentId,
        lang: &str,
    ) -> Result<ContentView, AppError> {
        let path = format!("/api/v1/content/{id}/view");
        let builder = self
            .authorized_request(Method::GET, &path, token)
            .query(&[("lang", lang)]);
        request_json(builder).await
    }
}
