//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `true`.
    pub success: bool,
    /// `ok` when the storage backend answers, else `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
}
