use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use base64::Engine;
use herocam::{
    config::Config,
    domain::verification::{
        entity::{VerificationCheck, VerificationTicket},
        errors::VerificationError,
    },
    infrastructure::{
        assets::{
            memory_overlay_provider::InMemoryOverlayProvider,
            traits::{OverlayAsset, OverlayAssetProvider},
        },
        storage::local_storage_service::LocalStorageService,
        verification::traits::VerificationService,
    },
    presentation::http::{
        routes::{FILES_PREFIX, create_router},
        state::AppState,
    },
};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use serde::de::DeserializeOwned;
use std::{io::Cursor, path::PathBuf, sync::Arc};
use uuid::Uuid;

pub const TEST_HOST: &str = "herocam.test";

/// Code the fake provider approves.
pub const GOOD_CODE: &str = "123456";

#[derive(Clone)]
struct TestVerification;

#[async_trait]
impl VerificationService for TestVerification {
    async fn send(&self, phone: &str) -> Result<VerificationTicket, VerificationError> {
        if phone.starts_with('+') {
            Ok(VerificationTicket {
                sid: "VE-test".to_string(),
                status: "pending".to_string(),
            })
        } else {
            Err(VerificationError::Provider {
                status: 400,
                message: format!("Invalid parameter `To`: {}", phone),
            })
        }
    }

    async fn check(
        &self,
        _phone: &str,
        code: &str,
    ) -> Result<VerificationCheck, VerificationError> {
        let status = if code == GOOD_CODE { "approved" } else { "pending" };
        Ok(VerificationCheck {
            status: status.to_string(),
        })
    }

    fn is_configured(&self) -> bool {
        true
    }
}

pub struct TestApp {
    pub app: Router,
    pub output_dir: PathBuf,
}

impl TestApp {
    /// Names of every file in the output directory, hidden partials included.
    pub fn output_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.output_dir)
            .expect("output dir should exist")
            .map(|entry| {
                entry
                    .expect("failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

pub struct TestAppBuilder {
    assets: Arc<dyn OverlayAssetProvider>,
    verification: Arc<dyn VerificationService>,
    public_base_url: Option<String>,
    max_body_bytes: Option<usize>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            assets: Arc::new(InMemoryOverlayProvider::new(hero_asset())),
            verification: Arc::new(TestVerification),
            public_base_url: None,
            max_body_bytes: None,
        }
    }

    pub fn assets(mut self, assets: Arc<dyn OverlayAssetProvider>) -> Self {
        self.assets = assets;
        self
    }

    pub fn verification(mut self, verification: Arc<dyn VerificationService>) -> Self {
        self.verification = verification;
        self
    }

    pub fn public_base_url(mut self, url: &str) -> Self {
        self.public_base_url = Some(url.to_string());
        self
    }

    pub fn max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = Some(limit);
        self
    }

    pub async fn spawn(self) -> TestApp {
        let output_dir =
            std::env::temp_dir().join(format!("herocam-it-{}", Uuid::now_v7()));
        let defaults = Config::default();
        let config = Config {
            output_dir: output_dir.to_string_lossy().into_owned(),
            public_base_url: self.public_base_url,
            max_body_bytes: self.max_body_bytes.unwrap_or(defaults.max_body_bytes),
            ..defaults
        };

        let storage = Arc::new(LocalStorageService::new(&output_dir, FILES_PREFIX));
        storage
            .ensure_root()
            .await
            .expect("failed to create output dir");

        let state = AppState::new(config, self.assets, storage, self.verification);
        TestApp {
            app: create_router(state),
            output_dir,
        }
    }
}

pub async fn spawn_app() -> TestApp {
    TestAppBuilder::new().spawn().await
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    use tower::ServiceExt;
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json<T: DeserializeOwned>(res: axum::response::Response) -> T {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_bytes(res: axum::response::Response) -> Vec<u8> {
    to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body")
        .to_vec()
}

pub async fn read_text(res: axum::response::Response) -> String {
    String::from_utf8(read_bytes(res).await).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

pub fn assert_status(status: StatusCode, expected: StatusCode) {
    assert_eq!(status, expected, "expected {}, got {}", expected, status);
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::HOST, TEST_HOST)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::HOST, TEST_HOST)
        .body(Body::empty())
        .expect("failed to build request")
}

/// Opaque red hero with the production asset's 2:3 aspect ratio.
pub fn hero_asset() -> OverlayAsset {
    OverlayAsset::new(RgbaImage::from_pixel(20, 30, Rgba([255, 0, 0, 255])))
}

/// A solid white photo encoded as a JPEG data URL, the way the browser client sends it.
pub fn photo_data_url(width: u32, height: u32) -> String {
    let image = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
        .expect("failed to encode jpeg");
    format!(
        "data:image/jpeg;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Key of a returned composite URL, i.e. the file name under `/files/`.
pub fn key_from_url(url: &str) -> String {
    url.rsplit('/')
        .next()
        .expect("url should have a path")
        .to_string()
}
