//! Note CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use notevault_core::error::AppError;

use crate::dto::request::{CreateNoteRequest, UpdateNoteRequest, validate_body};
use crate::extractors::AccessOwner;
use crate::extractors::path::{parse_note_id, parse_scope};
use crate::state::AppState;

/// POST /api/notes
pub async fn create_note(
    State(state): State<AppState>,
    owner: AccessOwner,
    Json(req): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    validate_body(&req)?;
    let (folder_id, fields) = req.into_parts();
    let folder = parse_scope(folder_id.as_deref())?.as_parent();

    let note = state
        .note_service
        .place_note(owner.id(), folder, fields)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "note": note,
            "message": "Note created successfully"
        })),
    ))
}

/// GET /api/notes
pub async fn list_notes(
    State(state): State<AppState>,
    owner: AccessOwner,
) -> Result<Json<Value>, AppError> {
    let notes = state.note_service.list_notes(owner.id()).await?;

    Ok(Json(json!({
        "success": true,
        "count": notes.len(),
        "notes": notes
    })))
}

/// GET /api/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    owner: AccessOwner,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let note = state
        .note_service
        .get_note(owner.id(), parse_note_id(&id)?)
        .await?;

    Ok(Json(json!({ "success": true, "note": note })))
}

/// PUT /api/notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    owner: AccessOwner,
    Path(id): Path<String>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<Value>, AppError> {
    let note = state
        .note_service
        .update_note(owner.id(), parse_note_id(&id)?, req.into())
        .await?;

    Ok(Json(json!({
        "success": true,
        "note": note,
        "message": "Note updated successfully"
    })))
}

/// DELETE /api/notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    owner: AccessOwner,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    state
        .note_service
        .delete_note(owner.id(), parse_note_id(&id)?)
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": "Note deleted successfully"
    })))
}
