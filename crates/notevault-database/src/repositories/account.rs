//! Account repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use notevault_core::error::{AppError, ErrorKind};
use notevault_core::result::AppResult;
use notevault_core::types::AccountId;
use notevault_entity::account::Account;

use crate::traits::AccountStore;

/// Repository for access-code accounts.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE access_code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by code", e)
            })
    }

    async fn find_active_by_code(&self, code: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>(
            "SELECT * FROM accounts WHERE access_code = $1 AND is_active = TRUE",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find active account", e)
        })
    }

    async fn create(&self, code: &str) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (id, access_code) VALUES ($1, $2) RETURNING *",
        )
        .bind(AccountId::new())
        .bind(code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict("Access code already exists. Please choose a different one.")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create account", e),
        })
    }

    async fn touch_last_accessed(&self, id: AccountId) -> AppResult<()> {
        sqlx::query("UPDATE accounts SET last_accessed = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last access", e)
            })?;
        Ok(())
    }

    async fn deactivate(&self, code: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>(
            "UPDATE accounts SET is_active = FALSE, updated_at = NOW() \
             WHERE access_code = $1 RETURNING *",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to deactivate account", e))
    }
}
