//! Route definitions for the NoteVault HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and request logging.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(folder_routes())
        .merge(note_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Access-code endpoints (no header required)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/create", post(handlers::auth::create_access_code))
        .route("/auth/validate", post(handlers::auth::validate_access_code))
        .route(
            "/auth/deactivate",
            delete(handlers::auth::deactivate_access_code),
        )
}

/// Folder CRUD, contents, and tree
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folders",
            get(handlers::folder::list_folders).post(handlers::folder::create_folder),
        )
        .route("/folders/all", get(handlers::folder::list_all_folders))
        .route("/folders/tree", get(handlers::folder::get_tree))
        .route(
            "/folders/{id}",
            put(handlers::folder::rename_folder)
                .delete(handlers::folder::delete_folder),
        )
        .route("/folders/{id}/contents", get(handlers::folder::get_contents))
        .route(
            "/folders/{id}/breadcrumbs",
            get(handlers::folder::get_breadcrumbs),
        )
}

/// Note CRUD
fn note_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notes",
            get(handlers::note::list_notes).post(handlers::note::create_note),
        )
        .route(
            "/notes/{id}",
            get(handlers::note::get_note)
                .put(handlers::note::update_note)
                .delete(handlers::note::delete_note),
        )
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
