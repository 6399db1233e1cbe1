//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use notevault_api::{AppState, build_app};
use notevault_core::config::AppConfig;
use notevault_database::Stores;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Stores behind the router, for direct inspection
    pub stores: Stores,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new test application with the given configuration
    pub fn with_config(config: AppConfig) -> Self {
        let stores = Stores::memory();
        let router = build_app(AppState::new(config, stores.clone()));
        Self { router, stores }
    }

    /// Register an access code and return it
    pub async fn signup(&self, code: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/create",
                Some(serde_json::json!({ "accessCode": code })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        code.to_string()
    }

    /// Create a folder and return its id
    pub async fn create_folder(&self, code: &str, name: &str, parent: Option<&str>) -> String {
        let response = self
            .request(
                "POST",
                "/api/folders",
                Some(serde_json::json!({ "name": name, "parentId": parent })),
                Some(code),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["folder"]["id"]
            .as_str()
            .expect("folder id")
            .to_string()
    }

    /// Create a note and return its id
    pub async fn create_note(&self, code: &str, title: &str, folder: Option<&str>) -> String {
        let response = self
            .request(
                "POST",
                "/api/notes",
                Some(serde_json::json!({
                    "title": title,
                    "content": "body",
                    "folderId": folder,
                })),
                Some(code),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["note"]["id"]
            .as_str()
            .expect("note id")
            .to_string()
    }

    /// Send a request through the router
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        access_code: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(code) = access_code {
            req = req.header("x-access-code", code);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
