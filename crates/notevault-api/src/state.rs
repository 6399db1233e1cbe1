//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use notevault_core::config::AppConfig;
use notevault_database::Stores;
use notevault_service::{AccessCodeService, FolderService, NoteService, TreeService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Storage backend
    pub stores: Stores,
    /// Folder tree store
    pub folder_service: Arc<FolderService>,
    /// Note placement and CRUD
    pub note_service: Arc<NoteService>,
    /// Tree navigation
    pub tree_service: Arc<TreeService>,
    /// Access codes
    pub access_service: Arc<AccessCodeService>,
}

impl AppState {
    /// Wire every service on top of `stores`.
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        let folder_service = Arc::new(FolderService::new(
            Arc::clone(&stores.folders),
            Arc::clone(&stores.notes),
            config.folders.clone(),
        ));
        let note_service = Arc::new(NoteService::new(
            Arc::clone(&stores.notes),
            Arc::clone(&stores.folders),
            config.notes.clone(),
        ));
        let tree_service = Arc::new(TreeService::new(
            Arc::clone(&folder_service),
            Arc::clone(&note_service),
        ));
        let access_service = Arc::new(AccessCodeService::new(
            Arc::clone(&stores.accounts),
            config.auth.clone(),
        ));

        Self {
            config: Arc::new(config),
            stores,
            folder_service,
            note_service,
            tree_service,
            access_service,
        }
    }
}
