//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::common::{safe_email_log, ApiError, AppState};

/// Authenticated user extractor
///
/// Resolves the bearer token to the account email it was issued for. The
/// account row itself is not loaded; handlers scope every query by `email`.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state): Extension<Arc<AppState>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let token = match parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
        {
            Some(t) => t,
            None => {
                warn!("Authentication failed: missing Authorization header");
                return Err(ApiError::Unauthorized("Missing Authorization header".into()));
            }
        };

        // Handle "Bearer <token>" format or raw token
        let bare_token = token.strip_prefix("Bearer ").unwrap_or(token).trim();

        let email = app_state.identity.validate_token(bare_token)?;

        debug!(email = %safe_email_log(&email), "Bearer token accepted");
        Ok(AuthedUser { email })
    }
}
