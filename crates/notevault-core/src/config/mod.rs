//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Every field has a default, so an absent file yields a
//! runnable development configuration.

pub mod app;
pub mod auth;
pub mod content;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::content::{FolderConfig, NoteConfig};
pub use self::database::{DatabaseBackend, DatabaseConfig};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Access-code settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Folder tree settings.
    #[serde(default)]
    pub folders: FolderConfig,
    /// Note settings.
    #[serde(default)]
    pub notes: NoteConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default.toml` with an environment-specific overlay
    /// and environment variables prefixed with `NOTEVAULT__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("NOTEVAULT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        Self::from_config(config)
    }

    /// Deserializes a built `config::Config`, capping field limits at the
    /// column widths of the schema.
    pub fn from_config(config: config::Config) -> Result<Self, AppError> {
        let mut app: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app.folders.max_name_length = app
            .folders
            .max_name_length
            .min(content::FOLDER_NAME_COLUMN_LIMIT);
        app.notes.max_title_length = app
            .notes
            .max_title_length
            .min(content::NOTE_TITLE_COLUMN_LIMIT);

        Ok(app)
    }
}
