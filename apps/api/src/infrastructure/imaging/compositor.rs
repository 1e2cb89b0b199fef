use super::alpha::{resize_premultiplied, scale_alpha};
use crate::{
    domain::composite::{
        errors::CompositeError,
        geometry::{Dimensions, OverlayGeometry},
        params::PlacementParams,
    },
    infrastructure::assets::traits::OverlayAsset,
};
use image::{DynamicImage, RgbImage, codecs::jpeg::JpegEncoder, imageops::FilterType};
use std::io::Cursor;
use tracing::debug;

pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Output of a single composite, ready to be persisted.
#[derive(Debug, Clone)]
pub struct CompositeOutput {
    pub jpeg: Vec<u8>,
    pub base: Dimensions,
    pub geometry: OverlayGeometry,
}

/// Places the overlay asset onto a photo and encodes the result as JPEG.
///
/// All work here is CPU-bound and synchronous; async callers should run it on the blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct Compositor {
    jpeg_quality: u8,
}

impl Compositor {
    pub fn new(jpeg_quality: u8) -> Self {
        Self {
            jpeg_quality: jpeg_quality.clamp(1, 100),
        }
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }

    /// Decodes `photo`, draws `overlay` on it according to `params` and encodes the result.
    ///
    /// # Errors
    ///
    /// - `CompositeError::InvalidInput` when `photo` is not a decodable image
    /// - `CompositeError::Processing` when JPEG encoding fails
    pub fn compose(
        &self,
        photo: &[u8],
        overlay: &OverlayAsset,
        params: &PlacementParams,
    ) -> Result<CompositeOutput, CompositeError> {
        let decoded = image::load_from_memory(photo)
            .map_err(|e| CompositeError::InvalidInput(format!("Invalid image data: {}", e)))?;

        // any alpha in the photo is dropped; the overlay lands on an opaque canvas
        let mut canvas = DynamicImage::ImageRgb8(decoded.to_rgb8()).into_rgba8();
        drop(decoded);

        let base = Dimensions::new(canvas.width(), canvas.height());
        let geometry = OverlayGeometry::compute(base, overlay.dimensions(), params);

        debug!(
            "Compositing {}x{} overlay at ({}, {}) onto {}x{} photo, opacity {:.2}",
            geometry.width,
            geometry.height,
            geometry.x,
            geometry.y,
            base.width,
            base.height,
            params.opacity()
        );

        let mut layer = resize_premultiplied(
            overlay.image(),
            geometry.width,
            geometry.height,
            FilterType::Lanczos3,
        );
        scale_alpha(&mut layer, params.opacity());
        image::imageops::overlay(
            &mut canvas,
            &layer,
            i64::from(geometry.x),
            i64::from(geometry.y),
        );

        let canvas = DynamicImage::ImageRgba8(canvas).into_rgb8();
        let jpeg = self.encode(&canvas)?;
        debug!("JPEG encoding complete, output size: {} bytes", jpeg.len());

        Ok(CompositeOutput {
            jpeg,
            base,
            geometry,
        })
    }

    fn encode(&self, canvas: &RgbImage) -> Result<Vec<u8>, CompositeError> {
        let mut buffer = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut buffer, self.jpeg_quality);
        canvas
            .write_with_encoder(encoder)
            .map_err(|e| CompositeError::Processing(format!("JPEG encoding failed: {}", e)))?;
        Ok(buffer.into_inner())
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(DEFAULT_JPEG_QUALITY)
    }
}
