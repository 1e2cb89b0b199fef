//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup via standard `std::env::var`,
//! after `dotenvy` has merged any `.env` file.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `RUST_LOG`: Logging level (default: "info,herocam=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 5000)
//! - `FRONTEND_ORIGIN`: Allowed CORS origin(s), comma separated, or `*` (default: "*")
//! - `OUTPUT_DIR`: Directory composites are written to and served from (default: "./files")
//! - `HERO_ASSET_PATH`: Overlay graphic (default: "./hero.png")
//! - `HERO_ASSET_PRELOAD`: Decode the overlay once at startup instead of per request (default: false)
//! - `PUBLIC_BASE_URL`: Prefix for returned composite URLs; derived from the request when unset
//! - `JPEG_QUALITY`: Output JPEG quality (default: 90)
//! - `MAX_BODY_BYTES`: Request body limit (default: 25 MiB)
//! - `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN`, `TWILIO_VERIFY_SERVICE_SID`: Verify credentials
//! - `TWILIO_API_BASE`: Verify API base URL (default: "https://verify.twilio.com")
//! - `OUTPUT_RETENTION_MINUTES`: Delete composites older than this; 0 keeps them forever (default: 0)
//! - `OUTPUT_SWEEP_INTERVAL_SECONDS`: Retention sweep interval (default: 600)

use crate::infrastructure::{
    imaging::compositor::DEFAULT_JPEG_QUALITY, verification::twilio_verify_service::DEFAULT_API_BASE,
};
use serde::Deserialize;

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Allowed CORS origin(s); `*` allows any
    pub frontend_origin: String,

    /// Directory holding generated composites, served under `/files`
    pub output_dir: String,

    /// Path of the hero overlay graphic
    pub hero_asset_path: String,

    /// Decode the hero asset once at startup
    pub hero_asset_preload: bool,

    /// Public origin used to build absolute composite URLs (e.g. `https://cdn.example.com`)
    pub public_base_url: Option<String>,

    pub jpeg_quality: u8,

    /// Maximum accepted request body, in bytes
    pub max_body_bytes: usize,

    pub twilio_account_sid: Option<String>,
    pub twilio_auth_token: Option<String>,
    pub twilio_verify_service_sid: Option<String>,
    pub twilio_api_base: String,

    /// Minutes a composite is kept; 0 disables the sweeper
    pub output_retention_minutes: i64,

    /// Interval in seconds between retention sweeps
    pub output_sweep_interval_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 5000)?,
            frontend_origin: env_or("FRONTEND_ORIGIN", "*".to_string())?,
            output_dir: env_or("OUTPUT_DIR", "./files".to_string())?,
            hero_asset_path: env_or("HERO_ASSET_PATH", "./hero.png".to_string())?,
            hero_asset_preload: env_or("HERO_ASSET_PRELOAD", false)?,
            public_base_url: env_optional("PUBLIC_BASE_URL"),
            jpeg_quality: env_or("JPEG_QUALITY", DEFAULT_JPEG_QUALITY)?,
            max_body_bytes: env_or("MAX_BODY_BYTES", 25 * 1024 * 1024)?,
            twilio_account_sid: env_optional("TWILIO_ACCOUNT_SID"),
            twilio_auth_token: env_optional("TWILIO_AUTH_TOKEN"),
            twilio_verify_service_sid: env_optional("TWILIO_VERIFY_SERVICE_SID"),
            twilio_api_base: env_or("TWILIO_API_BASE", DEFAULT_API_BASE.to_string())?,
            output_retention_minutes: env_or("OUTPUT_RETENTION_MINUTES", 0)?,
            output_sweep_interval_seconds: env_or("OUTPUT_SWEEP_INTERVAL_SECONDS", 600)?,
        })
    }

    /// Twilio credentials, present only when all three are configured.
    pub fn twilio_credentials(&self) -> Option<(String, String, String)> {
        match (
            &self.twilio_account_sid,
            &self.twilio_auth_token,
            &self.twilio_verify_service_sid,
        ) {
            (Some(sid), Some(token), Some(service)) => {
                Some((sid.clone(), token.clone(), service.clone()))
            }
            _ => None,
        }
    }

    /// Origins listed in `FRONTEND_ORIGIN`; empty when any origin is allowed.
    pub fn allowed_origins(&self) -> Vec<String> {
        parse_origins(&self.frontend_origin)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            frontend_origin: "*".to_string(),
            output_dir: "./files".to_string(),
            hero_asset_path: "./hero.png".to_string(),
            hero_asset_preload: false,
            public_base_url: None,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            max_body_bytes: 25 * 1024 * 1024,
            twilio_account_sid: None,
            twilio_auth_token: None,
            twilio_verify_service_sid: None,
            twilio_api_base: DEFAULT_API_BASE.to_string(),
            output_retention_minutes: 0,
            output_sweep_interval_seconds: 600,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*")
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect()
}

/// Load an optional environment variable, treating blank values as unset.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
