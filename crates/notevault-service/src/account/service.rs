//! Access-code issuance, validation, and deactivation.

use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};

use notevault_core::config::AuthConfig;
use notevault_core::error::{AppError, ErrorKind};
use notevault_core::result::AppResult;
use notevault_core::types::AccountId;
use notevault_database::traits::AccountStore;
use notevault_entity::account::{Account, is_valid_access_code};

/// Issues and checks the six-digit codes that identify accounts.
#[derive(Debug, Clone)]
pub struct AccessCodeService {
    /// Account persistence.
    accounts: Arc<dyn AccountStore>,
    /// Auth settings.
    config: AuthConfig,
}

/// A uniformly random six-digit code, leading zeros kept.
fn generate_code() -> String {
    let n: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{n:06}")
}

impl AccessCodeService {
    /// Creates a new access-code service.
    pub fn new(accounts: Arc<dyn AccountStore>, config: AuthConfig) -> Self {
        Self { accounts, config }
    }

    /// Creates an account for `code`, or for a freshly generated code when `None`.
    pub async fn create(&self, code: Option<&str>) -> AppResult<Account> {
        if let Some(code) = code {
            let code = code.trim();
            if !is_valid_access_code(code) {
                return Err(AppError::validation("Access code must be exactly 6 digits"));
            }
            let account = self.accounts.create(code).await?;
            info!(account_id = %account.id, "Access code created");
            return Ok(account);
        }

        for attempt in 1..=self.config.generate_attempts {
            match self.accounts.create(&generate_code()).await {
                Ok(account) => {
                    info!(account_id = %account.id, attempt, "Access code generated");
                    return Ok(account);
                }
                Err(e) if e.kind == ErrorKind::Conflict => {
                    warn!(attempt, "Generated access code already taken");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::conflict(
            "Could not generate a unique access code, please try again",
        ))
    }

    /// Checks a code submitted by a client.
    pub async fn validate(&self, code: &str) -> AppResult<Account> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AppError::validation("Access code is required"));
        }
        self.authenticate(code).await
    }

    /// Resolves the account behind a request's access-code header.
    pub async fn resolve_owner(&self, code: &str) -> AppResult<AccountId> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AppError::authentication("Access code required"));
        }
        Ok(self.authenticate(code).await?.id)
    }

    async fn authenticate(&self, code: &str) -> AppResult<Account> {
        let account = self
            .accounts
            .find_active_by_code(code)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid or inactive access code"))?;
        self.accounts.touch_last_accessed(account.id).await?;
        Ok(account)
    }

    /// Marks the account holding `code` inactive.
    pub async fn deactivate(&self, code: &str) -> AppResult<Account> {
        let account = self
            .accounts
            .deactivate(code.trim())
            .await?
            .ok_or_else(|| AppError::not_found("Access code not found"))?;
        info!(account_id = %account.id, "Access code deactivated");
        Ok(account)
    }
}
