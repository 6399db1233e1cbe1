//! Integration tests for access codes and header authentication.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_and_validate_access_code() {
    let app = TestApp::new();
    app.signup("123456").await;

    let response = app
        .request(
            "POST",
            "/api/auth/validate",
            Some(json!({ "accessCode": "123456" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["accessCode"], "123456");
    assert!(response.body["userId"].is_string());
}

#[tokio::test]
async fn test_generated_access_code() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/auth/create", Some(json!({})), None)
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let code = response.body["accessCode"].as_str().expect("code");
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_duplicate_and_malformed_codes() {
    let app = TestApp::new();
    app.signup("111111").await;

    let duplicate = app
        .request(
            "POST",
            "/api/auth/create",
            Some(json!({ "accessCode": "111111" })),
            None,
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.body["success"], false);
    assert_eq!(duplicate.body["error"], "CONFLICT");

    let malformed = app
        .request(
            "POST",
            "/api/auth/create",
            Some(json!({ "accessCode": "12ab56" })),
            None,
        )
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_protected_routes_require_header() {
    let app = TestApp::new();

    let missing = app.request("GET", "/api/folders", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let unknown = app.request("GET", "/api/folders", None, Some("999999")).await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deactivated_code_is_rejected() {
    let app = TestApp::new();
    let code = app.signup("222222").await;

    let response = app
        .request(
            "DELETE",
            "/api/auth/deactivate",
            Some(json!({ "accessCode": code })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let after = app.request("GET", "/api/notes", None, Some(&code)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);

    let unknown = app
        .request(
            "DELETE",
            "/api/auth/deactivate",
            Some(json!({ "accessCode": "333333" })),
            None,
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(app.stores.health_check().await.unwrap());
}
