//! Access-code configuration.

use serde::{Deserialize, Serialize};

/// Settings for access-code issuance and request authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Request header carrying the access code.
    #[serde(default = "default_header")]
    pub access_code_header: String,
    /// How many random codes to try before giving up on a generated code.
    #[serde(default = "default_generate_attempts")]
    pub generate_attempts: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_code_header: default_header(),
            generate_attempts: default_generate_attempts(),
        }
    }
}

fn default_header() -> String {
    "x-access-code".to_string()
}

fn default_generate_attempts() -> u32 {
    10
}
