use super::traits::{OverlayAsset, OverlayAssetProvider};
use crate::domain::composite::errors::CompositeError;
use async_trait::async_trait;

/// Serves an asset decoded once up front. Holding `None` behaves like a missing file.
pub struct InMemoryOverlayProvider {
    asset: Option<OverlayAsset>,
}

impl InMemoryOverlayProvider {
    pub fn new(asset: OverlayAsset) -> Self {
        Self { asset: Some(asset) }
    }

    pub fn empty() -> Self {
        Self { asset: None }
    }

    /// Decodes `data` once; later loads are free.
    pub fn preload(data: &[u8]) -> anyhow::Result<Self> {
        Ok(Self::new(OverlayAsset::from_encoded(data)?))
    }
}

#[async_trait]
impl OverlayAssetProvider for InMemoryOverlayProvider {
    async fn load(&self) -> Result<OverlayAsset, CompositeError> {
        self.asset
            .clone()
            .ok_or_else(|| CompositeError::MissingAsset("hero asset not loaded".into()))
    }

    async fn is_available(&self) -> bool {
        self.asset.is_some()
    }
}
