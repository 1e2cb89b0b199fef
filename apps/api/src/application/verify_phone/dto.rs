use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate, TS)]
#[ts(export)]
pub struct SendOtpRequest {
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, TS)]
#[ts(export)]
pub struct VerifyOtpRequest {
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
    #[validate(required, length(min = 1))]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SendOtpResponse {
    pub success: bool,
    pub sid: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct VerifyOtpResponse {
    pub success: bool,
}
