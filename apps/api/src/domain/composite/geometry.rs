//! Overlay placement geometry.
//!
//! The overlay height is a fixed share of the photo height, scaled by the user factor, and the
//! width follows the asset's native aspect ratio. The top-left offset is derived from the anchored
//! edge and clamped so the overlay stays inside the photo whenever it fits.
//!
//! When the scaled overlay is larger than the photo on an axis, the clamp range on that axis is
//! empty and the offset pins to `0`. The blend step then clips whatever falls outside the frame.

use super::params::{PlacementParams, Side};

/// Share of the photo height covered by the overlay at scale `1.0`.
pub const OVERLAY_HEIGHT_RATIO: f64 = 0.8;

/// Used when the photo reports no dimensions.
pub const FALLBACK_BASE: Dimensions = Dimensions::new(1080, 1920);

/// Used when the overlay asset reports no dimensions.
pub const FALLBACK_OVERLAY: Dimensions = Dimensions::new(800, 1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Replaces zero (unreadable) axes with the fallback's.
    pub fn or(self, fallback: Dimensions) -> Self {
        Self {
            width: if self.width == 0 {
                fallback.width
            } else {
                self.width
            },
            height: if self.height == 0 {
                fallback.height
            } else {
                self.height
            },
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Where and how large the overlay is drawn on the photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayGeometry {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl OverlayGeometry {
    pub fn compute(base: Dimensions, overlay: Dimensions, params: &PlacementParams) -> Self {
        let base = base.or(FALLBACK_BASE);
        let aspect = overlay.or(FALLBACK_OVERLAY).aspect_ratio();

        let height = (f64::from(base.height) * OVERLAY_HEIGHT_RATIO * params.scale()).round();
        let width = (height * aspect).round();

        // a zero-sized overlay cannot be resized to
        let height = height.max(1.0) as i64;
        let width = width.max(1.0) as i64;

        let base_w = i64::from(base.width);
        let base_h = i64::from(base.height);

        let left = match params.side() {
            Side::Left => params.pos_x(),
            Side::Right => (base_w - width).saturating_sub(params.pos_x()),
        };
        let top = (base_h - height).saturating_sub(params.pos_y());

        Self {
            x: clamp_offset(left, base_w - width),
            y: clamp_offset(top, base_h - height),
            width: width as u32,
            height: height as u32,
        }
    }

    /// True when the overlay's bounding box lies entirely inside `base`.
    pub fn fits_within(&self, base: Dimensions) -> bool {
        u64::from(self.x) + u64::from(self.width) <= u64::from(base.width)
            && u64::from(self.y) + u64::from(self.height) <= u64::from(base.height)
    }
}

fn clamp_offset(candidate: i64, max: i64) -> u32 {
    candidate.min(max).max(0) as u32
}
