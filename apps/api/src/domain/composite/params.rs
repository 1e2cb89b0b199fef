use ts_rs::TS;

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 2.0;
pub const MIN_OPACITY: f64 = 0.2;
pub const MAX_OPACITY: f64 = 1.0;

pub const DEFAULT_SCALE: f64 = 1.0;
pub const DEFAULT_OFFSET: i64 = 30;
pub const DEFAULT_OPACITY: f64 = 1.0;

/// Edge of the photo the overlay is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, TS)]
#[ts(export, rename_all = "lowercase")]
pub enum Side {
    Left,
    #[default]
    Right,
}

impl Side {
    /// Anything other than `"left"` anchors to the right edge.
    pub fn from_param(value: &str) -> Self {
        if value == "left" { Side::Left } else { Side::Right }
    }
}

/// User-chosen placement of the overlay.
///
/// Values are clamped on construction, so out-of-range client input is corrected rather than
/// rejected and every accessor returns a value inside its documented range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementParams {
    side: Side,
    scale: f64,
    pos_x: i64,
    pos_y: i64,
    opacity: f64,
}

impl PlacementParams {
    pub fn new(side: Side, scale: f64, pos_x: i64, pos_y: i64, opacity: f64) -> Self {
        Self {
            side,
            scale: clamp_or(scale, MIN_SCALE, MAX_SCALE, DEFAULT_SCALE),
            pos_x,
            pos_y,
            opacity: clamp_or(opacity, MIN_OPACITY, MAX_OPACITY, DEFAULT_OPACITY),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Scale factor in `[0.5, 2.0]`.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Horizontal inset in pixels, measured from the anchored edge.
    pub fn pos_x(&self) -> i64 {
        self.pos_x
    }

    /// Vertical inset in pixels, measured upward from the bottom edge.
    pub fn pos_y(&self) -> i64 {
        self.pos_y
    }

    /// Alpha multiplier in `[0.2, 1.0]`.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self::new(
            Side::Right,
            DEFAULT_SCALE,
            DEFAULT_OFFSET,
            DEFAULT_OFFSET,
            DEFAULT_OPACITY,
        )
    }
}

/// Rounds a client-supplied pixel offset to the nearest integer.
pub fn offset_from_f64(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        DEFAULT_OFFSET
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
