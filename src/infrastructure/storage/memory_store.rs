use crate::application::ports::KeyValueStore;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local store. Nothing survives the process.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn store(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn retrieve(&self, key: &str) -> Result<Option<String>, AppError> {
        let values = self.values.read().await;
        Ok(values.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        let mut values = self.values.write().await;
        values.remove(key);
        Ok(())
    }
}
