// src/telemetry/handlers.rs

use axum::{
    extract::{rejection::JsonRejection, Extension, Json},
    http::StatusCode,
};
use serde_json::{json, Value};
use std::sync::Arc;

use super::models::{AddDataRequest, LogsResponse, StatusResponse};
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};

/// POST /add_data - Store one tracker reading for the caller
///
/// # Request Body
/// ```json
/// { "latitude": 12.97, "longitude": 77.59, "battery": 3.9, "status": "active" }
/// ```
pub async fn add_data(
    Extension(state): Extension<Arc<AppState>>,
    authed: AuthedUser,
    payload: Result<Json<AddDataRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(request) = payload?;

    state.telemetry.ingest(&authed.email, &request).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Data logged successfully" })),
    ))
}

/// GET /logs - Full history, oldest first
pub async fn logs(
    Extension(state): Extension<Arc<AppState>>,
    authed: AuthedUser,
) -> Result<Json<LogsResponse>, ApiError> {
    let logs = state.telemetry.list_all(&authed.email).await?;
    Ok(Json(LogsResponse { logs }))
}

/// GET /fetch_status - Latest reading, 404 before the first one
pub async fn fetch_status(
    Extension(state): Extension<Arc<AppState>>,
    authed: AuthedUser,
) -> Result<Json<StatusResponse>, ApiError> {
    let report = state.telemetry.latest(&authed.email).await?;
    Ok(Json(report.into()))
}
