use crate::domain::composite::{errors::CompositeError, geometry::Dimensions};
use async_trait::async_trait;
use image::RgbaImage;
use std::sync::Arc;

/// The decoded hero graphic, shared read-only between requests.
#[derive(Debug, Clone)]
pub struct OverlayAsset {
    image: Arc<RgbaImage>,
}

impl OverlayAsset {
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image: Arc::new(image),
        }
    }

    /// Decodes an encoded asset (PNG, JPEG, WebP) and ensures it carries an alpha channel.
    pub fn from_encoded(data: &[u8]) -> Result<Self, image::ImageError> {
        Ok(Self::new(image::load_from_memory(data)?.to_rgba8()))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.image.width(), self.image.height())
    }
}

#[async_trait]
pub trait OverlayAssetProvider: Send + Sync {
    /// Fails with `CompositeError::MissingAsset` when the asset is absent.
    async fn load(&self) -> Result<OverlayAsset, CompositeError>;

    async fn is_available(&self) -> bool;
}
