use herocam::{
    config::Config,
    infrastructure::{
        assets::{
            file_overlay_provider::FileOverlayProvider,
            memory_overlay_provider::InMemoryOverlayProvider, traits::OverlayAssetProvider,
        },
        storage::local_storage_service::LocalStorageService,
        verification::{
            traits::VerificationService, twilio_verify_service::TwilioVerifyService,
            unconfigured::UnconfiguredVerification,
        },
    },
    presentation::http::{routes::{FILES_PREFIX, create_router}, state::AppState},
    workers::output_sweeper::OutputSweeper,
};
use http::{HeaderValue, Method, header};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,herocam=debug,tower_http=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;

    let storage = Arc::new(LocalStorageService::new(&config.output_dir, FILES_PREFIX));
    storage.ensure_root().await?;

    let assets: Arc<dyn OverlayAssetProvider> = if config.hero_asset_preload {
        let data = tokio::fs::read(&config.hero_asset_path).await.map_err(|e| {
            anyhow::anyhow!("Failed to preload hero asset {}: {}", config.hero_asset_path, e)
        })?;
        tracing::info!("Hero asset preloaded from {}", config.hero_asset_path);
        Arc::new(InMemoryOverlayProvider::preload(&data)?)
    } else {
        let provider = FileOverlayProvider::new(&config.hero_asset_path);
        if !provider.is_available().await {
            tracing::warn!(
                "Hero asset {} not found. /composite will fail until it is added.",
                config.hero_asset_path
            );
        }
        Arc::new(provider)
    };

    let verification: Arc<dyn VerificationService> = match config.twilio_credentials() {
        Some((account_sid, auth_token, service_sid)) => Arc::new(TwilioVerifyService::new(
            config.twilio_api_base.clone(),
            account_sid,
            auth_token,
            service_sid,
        )?),
        None => {
            tracing::warn!(
                "Twilio credentials not set. OTP endpoints will fail until you add env vars."
            );
            Arc::new(UnconfiguredVerification)
        }
    };

    if config.output_retention_minutes > 0 {
        let sweeper = OutputSweeper::new(
            storage.clone(),
            config.output_retention_minutes,
            config.output_sweep_interval_seconds,
        );
        tokio::spawn(async move { sweeper.start().await });
    }

    let state = AppState::new(config.clone(), assets, storage, verification);

    let allowed = config.allowed_origins();
    let cors = if allowed.is_empty() {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = allowed
            .iter()
            .map(|origin| HeaderValue::from_str(origin))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid FRONTEND_ORIGIN: {}", e))?;
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    }
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
    .max_age(Duration::from_secs(3600));

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
