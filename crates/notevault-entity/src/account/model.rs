//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notevault_core::types::AccountId;

/// Number of digits in an access code.
pub const ACCESS_CODE_LEN: usize = 6;

/// The holder of an access code. Owns every folder and note it creates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account identifier.
    pub id: AccountId,
    /// The shared secret, exactly six ASCII digits.
    pub access_code: String,
    /// Inactive accounts cannot authenticate.
    pub is_active: bool,
    /// Last successful validation.
    pub last_accessed: DateTime<Utc>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Build a fresh, active account for `access_code`.
    pub fn new(access_code: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            access_code: access_code.into(),
            is_active: true,
            last_accessed: now,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Check that `code` is exactly [`ACCESS_CODE_LEN`] ASCII digits.
pub fn is_valid_access_code(code: &str) -> bool {
    code.len() == ACCESS_CODE_LEN && code.bytes().all(|b| b.is_ascii_digit())
}
