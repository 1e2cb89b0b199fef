use crate::{
    application::create_composite::{
        data_url::DataUrl,
        dto::{CompositeRequest, CompositeResponse},
    },
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, header},
};

pub async fn create_composite(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CompositeRequest>, JsonRejection>,
) -> Result<Json<CompositeResponse>, AppError> {
    let Json(request) = payload?;

    let photo = request
        .photo
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("photo (data URL) is required".into()))?;

    let data_url = DataUrl::parse(photo)
        .ok_or_else(|| AppError::BadRequest("invalid photo data URL".into()))?;

    tracing::debug!(
        "Decoded {} photo payload ({} bytes)",
        data_url.mime,
        data_url.data.len()
    );

    let stored = state
        .composites
        .execute(data_url.data, request.placement())
        .await?;

    let url = absolute_url(
        &stored.path,
        state.config.public_base_url.as_deref(),
        &headers,
    );
    Ok(Json(CompositeResponse { url }))
}

/// Turns a storage path such as `/files/<name>.jpg` into a URL the client can fetch.
///
/// A configured public base wins; otherwise the URL is rebuilt from the request's `Host` and
/// `X-Forwarded-Proto` headers.
fn absolute_url(path: &str, public_base: Option<&str>, headers: &HeaderMap) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if let Some(base) = public_base {
        return format!("{}{}", base.trim_end_matches('/'), path);
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("localhost");
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|s| *s == "http" || *s == "https")
        .unwrap_or("http");

    format!("{}://{}{}", scheme, host, path)
}
