//! Backend selection: one bundle of trait objects for the service layer.

use std::sync::Arc;

use tracing::info;

use notevault_core::config::{DatabaseBackend, DatabaseConfig};
use notevault_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{AccountRepository, FolderRepository, NoteRepository};
use crate::traits::{AccountStore, FolderStore, NoteStore};

/// The stores every service is built from.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Folder persistence.
    pub folders: Arc<dyn FolderStore>,
    /// Note persistence.
    pub notes: Arc<dyn NoteStore>,
    /// Account persistence.
    pub accounts: Arc<dyn AccountStore>,
    /// Connection pool, present for the PostgreSQL backend.
    pool: Option<DatabasePool>,
}

impl Stores {
    /// Stores backed by a fresh [`MemoryStore`].
    pub fn memory() -> Self {
        let store = MemoryStore::new();
        Self {
            folders: Arc::new(store.clone()),
            notes: Arc::new(store.clone()),
            accounts: Arc::new(store),
            pool: None,
        }
    }

    /// Stores backed by PostgreSQL repositories sharing `pool`.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            folders: Arc::new(FolderRepository::new(pg.clone())),
            notes: Arc::new(NoteRepository::new(pg.clone())),
            accounts: Arc::new(AccountRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// Build the configured backend, connecting and migrating when it is PostgreSQL.
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            DatabaseBackend::Memory => {
                info!("Using in-memory storage backend");
                Ok(Self::memory())
            }
            DatabaseBackend::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                run_migrations(pool.pool()).await?;
                Ok(Self::postgres(pool))
            }
        }
    }

    /// Check backend connectivity. Always healthy for the memory backend.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
