use super::traits::{StorageService, StoredObject};
use anyhow::{Context, bail};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const PARTIAL_SUFFIX: &str = ".part";

/// Stores objects as flat files in a directory that is also served statically.
///
/// Writes go to a hidden `.part` file first and are renamed into place, so readers never observe
/// a half-written object and a failed write leaves nothing behind under the final name.
pub struct LocalStorageService {
    root: PathBuf,
    public_prefix: String,
}

impl LocalStorageService {
    pub fn new(root: impl Into<PathBuf>, public_prefix: &str) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Creates the storage directory if it does not exist yet.
    pub async fn ensure_root(&self) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("Failed to create output directory {}", self.root.display()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn object_path(&self, key: &str) -> anyhow::Result<PathBuf> {
        if key.is_empty()
            || key.starts_with('.')
            || key.contains('/')
            || key.contains('\\')
            || key.contains("..")
        {
            bail!("Invalid storage key: {:?}", key);
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl StorageService for LocalStorageService {
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str) -> anyhow::Result<String> {
        let path = self.object_path(key)?;
        let partial = self.root.join(format!(".{}{}", key, PARTIAL_SUFFIX));

        if let Err(err) = tokio::fs::write(&partial, &data).await {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(err).with_context(|| format!("Failed to write {}", partial.display()));
        }
        if let Err(err) = tokio::fs::rename(&partial, &path).await {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(err).with_context(|| format!("Failed to publish {}", path.display()));
        }

        debug!(
            "Stored {} ({} bytes, {})",
            path.display(),
            data.len(),
            content_type
        );
        Ok(self.get_url(key))
    }

    async fn delete(&self, key: &str) -> anyhow::Result<()> {
        let path = self.object_path(key)?;
        tokio::fs::remove_file(&path)
            .await
            .with_context(|| format!("Failed to delete {}", path.display()))
    }

    async fn list(&self) -> anyhow::Result<Vec<StoredObject>> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .with_context(|| format!("Failed to read {}", self.root.display()))?;

        let mut objects = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let key = entry.file_name().to_string_lossy().into_owned();
            if key.starts_with('.') {
                continue;
            }
            let meta = match entry.metadata().await {
                Ok(meta) if meta.is_file() => meta,
                Ok(_) => continue,
                Err(err) => {
                    warn!("Skipping unreadable entry {}: {}", key, err);
                    continue;
                }
            };
            let modified = meta
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());
            objects.push(StoredObject { key, modified });
        }
        Ok(objects)
    }

    async fn is_writable(&self) -> bool {
        tokio::fs::metadata(&self.root)
            .await
            .map(|meta| meta.is_dir() && !meta.permissions().readonly())
            .unwrap_or(false)
    }

    fn get_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_prefix, key)
    }
}
