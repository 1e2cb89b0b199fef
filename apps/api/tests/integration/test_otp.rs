use super::helpers::{
    GOOD_CODE, TestAppBuilder, assert_status, expect_status, post_json, read_json, send,
    spawn_app,
};
use axum::http::StatusCode;
use herocam::infrastructure::verification::unconfigured::UnconfiguredVerification;
use serde_json::{Value, json};
use std::sync::Arc;

#[tokio::test]
async fn send_otp_returns_provider_ticket() {
    let app = spawn_app().await;
    let res = expect_status(
        send(&app.app, post_json("/send-otp", json!({ "phone": "+15550001111" }))).await,
        StatusCode::OK,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["sid"], "VE-test");
    assert_eq!(body["status"], "pending");
}

#[tokio::test]
async fn send_otp_requires_phone() {
    let app = spawn_app().await;
    for body in [json!({}), json!({ "phone": "" }), json!({ "phone": null })] {
        let res = send(&app.app, post_json("/send-otp", body)).await;
        assert_status(res.status(), StatusCode::BAD_REQUEST);
        let payload: Value = read_json(res).await;
        assert_eq!(payload["success"], false);
        assert_eq!(payload["error"], "phone required");
    }
}

#[tokio::test]
async fn provider_errors_are_passed_through() {
    let app = spawn_app().await;
    let res = send(&app.app, post_json("/send-otp", json!({ "phone": "5550001111" }))).await;
    assert_status(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload: Value = read_json(res).await;
    assert_eq!(payload["success"], false);
    assert_eq!(payload["error"], "Invalid parameter `To`: 5550001111");
}

#[tokio::test]
async fn verify_otp_accepts_approved_code() {
    let app = spawn_app().await;
    let res = expect_status(
        send(
            &app.app,
            post_json(
                "/verify-otp",
                json!({ "phone": "+15550001111", "code": GOOD_CODE }),
            ),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn verify_otp_rejects_wrong_code_with_status() {
    let app = spawn_app().await;
    let res = send(
        &app.app,
        post_json(
            "/verify-otp",
            json!({ "phone": "+15550001111", "code": "000000" }),
        ),
    )
    .await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = read_json(res).await;
    assert_eq!(
        body,
        json!({ "success": false, "error": "incorrect code", "status": "pending" })
    );
}

#[tokio::test]
async fn verify_otp_requires_phone_and_code() {
    let app = spawn_app().await;
    for body in [
        json!({ "phone": "+15550001111" }),
        json!({ "code": GOOD_CODE }),
        json!({ "phone": "", "code": GOOD_CODE }),
    ] {
        let res = send(&app.app, post_json("/verify-otp", body)).await;
        assert_status(res.status(), StatusCode::BAD_REQUEST);
        let payload: Value = read_json(res).await;
        assert_eq!(payload["error"], "phone and code required");
    }
}

#[tokio::test]
async fn unconfigured_provider_fails_every_call() {
    let app = TestAppBuilder::new()
        .verification(Arc::new(UnconfiguredVerification))
        .spawn()
        .await;

    let res = send(&app.app, post_json("/send-otp", json!({ "phone": "+15550001111" }))).await;
    assert_status(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload: Value = read_json(res).await;
    assert_eq!(payload["error"], "Twilio not configured");

    let res = send(
        &app.app,
        post_json(
            "/verify-otp",
            json!({ "phone": "+15550001111", "code": GOOD_CODE }),
        ),
    )
    .await;
    assert_status(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
