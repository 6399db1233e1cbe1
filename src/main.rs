//! NoteVault Server: personal notes organized in a folder tree.
//!
//! Main entry point that loads configuration, initializes logging, opens
//! the configured storage backend, and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use notevault_core::config::AppConfig;
use notevault_core::error::AppError;
use notevault_database::Stores;

#[tokio::main]
async fn main() {
    let env = std::env::var("NOTEVAULT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = ?config.database.backend,
        "Starting NoteVault"
    );

    let stores = Stores::from_config(&config.database).await?;
    notevault_api::run_server(config, stores).await
}
