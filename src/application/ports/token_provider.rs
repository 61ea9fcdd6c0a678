use crate::shared::error::AppError;
use async_trait::async_trait;

/// Issues a bearer token for the content API. Implementations do not cache.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn get_token(&self) -> Result<String, AppError>;
}
