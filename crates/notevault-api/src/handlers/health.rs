//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let healthy = match state.stores.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            warn!(error = %e, "Storage health check failed");
            false
        }
    };

    Json(HealthResponse {
        success: true,
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
