use crate::{
    application::verify_phone::{
        dto::{SendOtpRequest, SendOtpResponse, VerifyOtpRequest, VerifyOtpResponse},
        use_case::CodeCheckOutcome,
    },
    domain::verification::errors::VerificationError,
    presentation::http::state::AppState,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::Validate;

/// Failures of the OTP endpoints, rendered as `{ "success": false, "error": ... }`.
#[derive(Debug)]
pub enum OtpError {
    BadRequest(String),
    IncorrectCode { status: String },
    Provider(VerificationError),
}

impl IntoResponse for OtpError {
    fn into_response(self) -> Response {
        match self {
            OtpError::BadRequest(msg) => {
                tracing::warn!("error={}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": msg })),
                )
                    .into_response()
            }
            OtpError::IncorrectCode { status } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": "incorrect code", "status": status })),
            )
                .into_response(),
            OtpError::Provider(err) => {
                tracing::error!(verification_error = %err, "Verification provider call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

impl From<VerificationError> for OtpError {
    fn from(err: VerificationError) -> Self {
        OtpError::Provider(err)
    }
}

pub async fn send_otp(
    State(state): State<AppState>,
    payload: Result<Json<SendOtpRequest>, JsonRejection>,
) -> Result<Json<SendOtpResponse>, OtpError> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();
    let phone = match (request.validate(), request.phone) {
        (Ok(()), Some(phone)) => phone,
        _ => return Err(OtpError::BadRequest("phone required".into())),
    };

    let ticket = state.phone_verification.send_code(&phone).await?;
    Ok(Json(SendOtpResponse {
        success: true,
        sid: ticket.sid,
        status: ticket.status,
    }))
}

pub async fn verify_otp(
    State(state): State<AppState>,
    payload: Result<Json<VerifyOtpRequest>, JsonRejection>,
) -> Result<Json<VerifyOtpResponse>, OtpError> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();
    let (phone, code) = match (request.validate(), request.phone, request.code) {
        (Ok(()), Some(phone), Some(code)) => (phone, code),
        _ => {
            return Err(OtpError::BadRequest("phone and code required".into()));
        }
    };

    match state
        .phone_verification
        .check_code(&phone, &code)
        .await?
    {
        CodeCheckOutcome::Approved => Ok(Json(VerifyOtpResponse { success: true })),
        CodeCheckOutcome::Rejected { status } => Err(OtpError::IncorrectCode { status }),
    }
}
