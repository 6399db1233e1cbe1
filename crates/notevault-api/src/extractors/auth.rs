//! `AccessOwner` extractor: resolves the access-code header to the owning account.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use notevault_core::error::AppError;
use notevault_core::types::AccountId;

use crate::state::AppState;

/// The account every protected request acts on behalf of.
#[derive(Debug, Clone, Copy)]
pub struct AccessOwner(pub AccountId);

impl AccessOwner {
    /// Returns the owning account ID.
    pub fn id(&self) -> AccountId {
        self.0
    }
}

impl FromRequestParts<AppState> for AccessOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = state.config.auth.access_code_header.as_str();
        let code = parts
            .headers
            .get(header)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Access code is required in headers"))?;

        let owner = state.access_service.resolve_owner(code).await?;
        Ok(AccessOwner(owner))
    }
}
