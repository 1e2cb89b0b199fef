use crate::{
    domain::composite::{errors::CompositeError, geometry::OverlayGeometry, params::PlacementParams},
    infrastructure::{
        assets::traits::OverlayAssetProvider, imaging::compositor::Compositor,
        storage::traits::StorageService,
    },
};
use bytes::Bytes;
use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;

/// A composite that has been written to storage.
#[derive(Debug, Clone)]
pub struct StoredComposite {
    pub key: String,
    /// Public path as returned by the storage service, e.g. `/files/<key>`.
    pub path: String,
    pub geometry: OverlayGeometry,
}

/// Builds a composite from a decoded photo payload and persists it.
///
/// Each call is independent: the overlay asset is read through the provider, the CPU-heavy
/// decode/blend/encode runs on the blocking pool, and the output is stored under a fresh UUID
/// name so concurrent requests never collide. Nothing is written unless encoding succeeded.
pub struct CreateCompositeUseCase {
    assets: Arc<dyn OverlayAssetProvider>,
    storage: Arc<dyn StorageService>,
    compositor: Compositor,
}

impl CreateCompositeUseCase {
    pub fn new(
        assets: Arc<dyn OverlayAssetProvider>,
        storage: Arc<dyn StorageService>,
        compositor: Compositor,
    ) -> Self {
        Self {
            assets,
            storage,
            compositor,
        }
    }

    #[instrument(skip(self, photo, params), fields(
        photo_bytes = photo.len(),
        side = ?params.side(),
        scale = params.scale(),
        opacity = params.opacity()
    ))]
    pub async fn execute(
        &self,
        photo: Bytes,
        params: PlacementParams,
    ) -> Result<StoredComposite, CompositeError> {
        let overlay = self.assets.load().await?;

        let compositor = self.compositor;
        let output = tokio::task::spawn_blocking(move || compositor.compose(&photo, &overlay, &params))
            .await
            .map_err(|e| {
                error!("Composite task panicked or was cancelled: {}", e);
                CompositeError::Processing(format!("Composite task failed: {}", e))
            })??;

        let key = format!("{}.jpg", Uuid::now_v7());
        let path = self
            .storage
            .upload(&key, output.jpeg, "image/jpeg")
            .await
            .map_err(|e| {
                error!("Storage upload failed for {}: {:#}", key, e);
                CompositeError::Storage(format!("Failed to store composite: {}", e))
            })?;

        info!(
            "Composite {} ready ({}x{} overlay at {},{})",
            key, output.geometry.width, output.geometry.height, output.geometry.x, output.geometry.y
        );

        Ok(StoredComposite {
            key,
            path,
            geometry: output.geometry,
        })
    }
}
