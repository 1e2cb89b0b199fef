use super::{
    handlers::{composite, health, otp},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;

/// Public path generated composites are served under.
pub const FILES_PREFIX: &str = "/files";

pub fn create_router(state: AppState) -> Router {
    let files = ServeDir::new(&state.config.output_dir);
    let body_limit = state.config.max_body_bytes;

    Router::new()
        // Health
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        // Phone verification
        .route("/send-otp", post(otp::send_otp))
        .route("/verify-otp", post(otp::verify_otp))
        // Compositing
        .route("/composite", post(composite::create_composite))
        .nest_service(FILES_PREFIX, files)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
