//! Folder CRUD, navigation, and tree handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use notevault_core::error::AppError;
use notevault_core::types::FolderScope;

use crate::dto::request::{
    CreateFolderRequest, ListFoldersQuery, RenameFolderRequest, validate_body,
};
use crate::extractors::AccessOwner;
use crate::extractors::path::{parse_folder_id, parse_scope};
use crate::state::AppState;

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    owner: AccessOwner,
    Json(req): Json<CreateFolderRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    validate_body(&req)?;
    let parent = parse_scope(req.parent_id.as_deref())?.as_parent();

    let folder = state
        .folder_service
        .create_folder(owner.id(), &req.name, parent)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "folder": folder,
            "message": "Folder created successfully"
        })),
    ))
}

/// GET /api/folders?parentId=
pub async fn list_folders(
    State(state): State<AppState>,
    owner: AccessOwner,
    Query(query): Query<ListFoldersQuery>,
) -> Result<Json<Value>, AppError> {
    let parent = parse_scope(query.parent_id.as_deref())?.as_parent();
    let folders = state
        .folder_service
        .list_children(owner.id(), parent)
        .await?;

    Ok(Json(json!({
        "success": true,
        "count": folders.len(),
        "folders": folders
    })))
}

/// GET /api/folders/all
pub async fn list_all_folders(
    State(state): State<AppState>,
    owner: AccessOwner,
) -> Result<Json<Value>, AppError> {
    let folders = state.tree_service.get_whole_tree(owner.id()).await?;

    Ok(Json(json!({
        "success": true,
        "count": folders.len(),
        "folders": folders
    })))
}

/// GET /api/folders/tree
pub async fn get_tree(
    State(state): State<AppState>,
    owner: AccessOwner,
) -> Result<Json<Value>, AppError> {
    let tree = state.tree_service.get_forest(owner.id()).await?;

    Ok(Json(json!({
        "success": true,
        "count": tree.total_folders,
        "tree": tree.roots
    })))
}

/// GET /api/folders/{id}/contents
pub async fn get_contents(
    State(state): State<AppState>,
    owner: AccessOwner,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let scope: FolderScope = id.parse()?;
    let contents = state.tree_service.get_contents(owner.id(), scope).await?;

    Ok(Json(json!({
        "success": true,
        "currentFolder": contents.current_folder,
        "folders": contents.subfolders,
        "notes": contents.notes
    })))
}

/// GET /api/folders/{id}/breadcrumbs
pub async fn get_breadcrumbs(
    State(state): State<AppState>,
    owner: AccessOwner,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let folder_id = parse_folder_id(&id)?;
    let breadcrumbs = state.tree_service.breadcrumbs(owner.id(), folder_id).await?;

    Ok(Json(json!({
        "success": true,
        "breadcrumbs": breadcrumbs
    })))
}

/// PUT /api/folders/{id}
pub async fn rename_folder(
    State(state): State<AppState>,
    owner: AccessOwner,
    Path(id): Path<String>,
    Json(req): Json<RenameFolderRequest>,
) -> Result<Json<Value>, AppError> {
    let folder_id = parse_folder_id(&id)?;
    validate_body(&req)?;

    let folder = state
        .folder_service
        .rename_folder(owner.id(), folder_id, &req.name)
        .await?;

    Ok(Json(json!({
        "success": true,
        "folder": folder,
        "message": "Folder updated successfully"
    })))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    owner: AccessOwner,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let folder_id = parse_folder_id(&id)?;
    let report = state
        .folder_service
        .delete_folder_cascade(owner.id(), folder_id)
        .await?;

    Ok(Json(json!({
        "success": true,
        "foldersDeleted": report.folders_deleted,
        "notesDeleted": report.notes_deleted,
        "message": "Folder and all contents deleted successfully"
    })))
}
