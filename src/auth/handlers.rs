//! Authentication handlers

use axum::{
    extract::{rejection::JsonRejection, Extension, Json},
    http::StatusCode,
};
use serde_json::{json, Value};
use std::sync::Arc;

use super::extractors::AuthedUser;
use super::models::{LoginRequest, RegisterRequest, TokenResponse};
use crate::common::{ApiError, AppState};

/// POST /register
/// Creates an account; the caller still has to log in afterwards
///
/// # Request Body
/// ```json
/// {
///   "name": "Asha",
///   "email": "asha@example.com",
///   "phone_number": "5551234567",
///   "password": "..."
/// }
/// ```
pub async fn register(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(request) = payload?;

    state.identity.register(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully" })),
    ))
}

/// POST /login
///
/// # Response
/// ```json
/// { "token": "<jwt token>" }
/// ```
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(request) = payload?;

    let token = state.identity.authenticate(&request).await?;

    Ok(Json(TokenResponse { token }))
}

/// GET /validate_token
/// The extractor does the work; reaching the body means the token is good
pub async fn validate_token(_authed: AuthedUser) -> Json<Value> {
    Json(json!({ "message": "Token is valid" }))
}
