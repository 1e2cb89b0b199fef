use super::traits::{OverlayAsset, OverlayAssetProvider};
use crate::domain::composite::errors::CompositeError;
use async_trait::async_trait;
use std::{io::ErrorKind, path::PathBuf};
use tracing::{debug, error};

/// Reads the hero asset from disk on every request, so the file can be replaced without a
/// restart.
pub struct FileOverlayProvider {
    path: PathBuf,
}

impl FileOverlayProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[async_trait]
impl OverlayAssetProvider for FileOverlayProvider {
    async fn load(&self) -> Result<OverlayAsset, CompositeError> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CompositeError::MissingAsset(format!(
                    "{} not found on server",
                    self.display_name()
                )));
            }
            Err(e) => {
                error!("Failed to read overlay asset {}: {}", self.path.display(), e);
                return Err(CompositeError::MissingAsset(format!(
                    "{} could not be read: {}",
                    self.display_name(),
                    e
                )));
            }
        };

        debug!("Loaded overlay asset {} ({} bytes)", self.path.display(), data.len());

        tokio::task::spawn_blocking(move || OverlayAsset::from_encoded(&data))
            .await
            .map_err(|e| CompositeError::Processing(format!("Overlay decode task failed: {}", e)))?
            .map_err(|e| CompositeError::Processing(format!("Invalid overlay asset: {}", e)))
    }

    async fn is_available(&self) -> bool {
        tokio::fs::metadata(&self.path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }
}
