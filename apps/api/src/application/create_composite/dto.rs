use crate::domain::composite::params::{
    DEFAULT_OFFSET, DEFAULT_OPACITY, DEFAULT_SCALE, PlacementParams, Side, offset_from_f64,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body of `POST /composite`. Every placement field is optional and falls back to the client
/// defaults.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompositeRequest {
    /// `data:<mime>;base64,<payload>`
    pub photo: Option<String>,
    pub side: Option<String>,
    pub scale: Option<f64>,
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
    pub opacity: Option<f64>,
}

impl CompositeRequest {
    pub fn placement(&self) -> PlacementParams {
        PlacementParams::new(
            self.side
                .as_deref()
                .map(Side::from_param)
                .unwrap_or_default(),
            self.scale.unwrap_or(DEFAULT_SCALE),
            self.pos_x.map(offset_from_f64).unwrap_or(DEFAULT_OFFSET),
            self.pos_y.map(offset_from_f64).unwrap_or(DEFAULT_OFFSET),
            self.opacity.unwrap_or(DEFAULT_OPACITY),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompositeResponse {
    /// Absolute URL of the generated JPEG.
    pub url: String,
}
