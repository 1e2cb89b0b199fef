use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// An object previously written through a `StorageService`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub modified: DateTime<Utc>,
}

#[async_trait]
pub trait StorageService: Send + Sync {
    /// Persists `data` under `key` and returns its public path.
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> anyhow::Result<String>;
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
    async fn list(&self) -> anyhow::Result<Vec<StoredObject>>;
    async fn is_writable(&self) -> bool;
    fn get_url(&self, key: &str) -> String;
}
