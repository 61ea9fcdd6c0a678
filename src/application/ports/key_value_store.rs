use crate::shared::error::AppError;
use async_trait::async_trait;

/// Origin-scoped string storage, the local equivalent of browser storage.
/// Each `store` call replaces the value as a whole.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn store(&self, key: &str, value: &str) -> Result<(), AppError>;
    async fn retrieve(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn delete(&self, key: &str) -> Result<(), AppError>;
}
