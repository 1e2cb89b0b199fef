use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    hero_asset: &'static str,
    output_dir: &'static str,
    verification: &'static str,
    version: &'static str,
}

pub async fn root() -> &'static str {
    "API OK"
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let hero_asset = if state.assets.is_available().await {
        "up"
    } else {
        tracing::error!("Health check failed: hero asset unavailable");
        "down"
    };

    let output_dir = if state.storage.is_writable().await {
        "up"
    } else {
        tracing::error!("Health check failed: output directory not writable");
        "down"
    };

    let verification = if state.verification.is_configured() {
        "configured"
    } else {
        "unconfigured"
    };

    let status = if hero_asset == "up" && output_dir == "up" {
        "healthy"
    } else {
        "unhealthy"
    };

    let response = HealthResponse {
        status,
        hero_asset,
        output_dir,
        verification,
        version: env!("CARGO_PKG_VERSION"),
    };

    let code = if status == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}
