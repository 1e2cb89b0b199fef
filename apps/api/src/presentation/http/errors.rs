//! HTTP error handling and response conversion.
//!
//! Handler failures are mapped to a status code and a `{ "error": message }` JSON body. Client
//! errors carry the message the client needs to fix its request; server-side composite failures
//! surface the underlying message, as the client has no other way to learn why a composite failed.

use crate::domain::composite::errors::CompositeError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Request is malformed (400).
    BadRequest(String),

    /// Request body could not be parsed (400).
    InvalidBody(String),

    /// Request body exceeds the configured limit (413).
    PayloadTooLarge(String),

    /// The overlay asset is absent on the server (500).
    MissingAsset(String),

    /// Image decoding, blending or encoding failed (500).
    Processing(String),

    /// Output file could not be written (500).
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::InvalidBody(msg) => write!(f, "Invalid body: {}", msg),
            Self::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            Self::MissingAsset(msg) => write!(f, "Missing asset: {}", msg),
            Self::Processing(msg) => write!(f, "Processing error: {}", msg),
            Self::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl AppError {
    /// Get the appropriate HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::MissingAsset(_) | Self::Processing(_) | Self::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message rendered to the client.
    fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg)
            | Self::InvalidBody(msg)
            | Self::PayloadTooLarge(msg)
            | Self::MissingAsset(msg)
            | Self::Processing(msg)
            | Self::Storage(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_REQUEST | StatusCode::PAYLOAD_TOO_LARGE => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<CompositeError> for AppError {
    fn from(err: CompositeError) -> Self {
        match err {
            CompositeError::InvalidInput(msg) => AppError::BadRequest(msg),
            CompositeError::MissingAsset(msg) => AppError::MissingAsset(msg),
            CompositeError::Processing(msg) => AppError::Processing(msg),
            CompositeError::Storage(msg) => AppError::Storage(msg),
        }
    }
}

// === Extractor Rejection Conversion ===

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(json_rejection = %rejection);
        from_rejection_parts(rejection.status(), rejection.body_text())
    }
}

/// Body limit failures keep their 413; every other rejection is a plain bad request.
fn from_rejection_parts(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::InvalidBody(message)
    }
}
