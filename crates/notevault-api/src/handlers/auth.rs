//! Access-code handlers. These routes do not require the access-code header.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};

use notevault_core::error::AppError;

use crate::dto::request::{AccessCodeRequest, CreateAccessCodeRequest, validate_body};
use crate::state::AppState;

/// POST /api/auth/create
pub async fn create_access_code(
    State(state): State<AppState>,
    Json(req): Json<CreateAccessCodeRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let requested = req.access_code.as_deref().filter(|c| !c.trim().is_empty());
    let account = state.access_service.create(requested).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "accessCode": account.access_code,
            "message": "Access code created successfully"
        })),
    ))
}

/// POST /api/auth/validate
pub async fn validate_access_code(
    State(state): State<AppState>,
    Json(req): Json<AccessCodeRequest>,
) -> Result<Json<Value>, AppError> {
    validate_body(&req)?;
    let account = state.access_service.validate(&req.access_code).await?;

    Ok(Json(json!({
        "success": true,
        "userId": account.id,
        "accessCode": account.access_code,
        "message": "Access code validated successfully"
    })))
}

/// DELETE /api/auth/deactivate
pub async fn deactivate_access_code(
    State(state): State<AppState>,
    Json(req): Json<AccessCodeRequest>,
) -> Result<Json<Value>, AppError> {
    validate_body(&req)?;
    state.access_service.deactivate(&req.access_code).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Access code deactivated successfully"
    })))
}
