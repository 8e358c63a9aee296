// src/device/handlers.rs

use axum::{
    extract::{rejection::JsonRejection, Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;

use super::models::{
    AntiTheftResponse, DeviceIdResponse, ToggleAntiTheftRequest, UpdateDeviceIdRequest,
    UpdatePinRequest, UpdateVehicleNumberRequest, VehicleNumberResponse,
};
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};
use crate::services::UpdateOutcome;

/// 200 with a message when something was written, bare 304 otherwise
fn update_response(outcome: UpdateOutcome, message: &str) -> Response {
    match outcome {
        UpdateOutcome::Updated => (StatusCode::OK, Json(json!({ "message": message }))).into_response(),
        UpdateOutcome::Unchanged => StatusCode::NOT_MODIFIED.into_response(),
    }
}

// ============================================================================
// Anti-theft
// ============================================================================

/// POST /toggle_anti_theft - Set the anti-theft flag (`false` is a valid value)
pub async fn toggle_anti_theft(
    Extension(state): Extension<Arc<AppState>>,
    authed: AuthedUser,
    payload: Result<Json<ToggleAntiTheftRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let outcome = state.identity.set_anti_theft(&authed.email, &request).await?;
    Ok(update_response(outcome, "Anti-theft mode updated successfully"))
}

/// GET /get_anti_theft
pub async fn get_anti_theft(
    Extension(state): Extension<Arc<AppState>>,
    authed: AuthedUser,
) -> Result<Json<AntiTheftResponse>, ApiError> {
    let anti_theft = state.identity.anti_theft(&authed.email).await?;
    Ok(Json(AntiTheftResponse { anti_theft }))
}

// ============================================================================
// Device binding
// ============================================================================

/// POST /update_device_id - Bind a tracker to the account
pub async fn update_device_id(
    Extension(state): Extension<Arc<AppState>>,
    authed: AuthedUser,
    payload: Result<Json<UpdateDeviceIdRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let outcome = state.identity.update_device_id(&authed.email, &request).await?;
    Ok(update_response(outcome, "Device ID updated successfully"))
}

/// POST /update_pin - Requires the currently bound device id
pub async fn update_pin(
    Extension(state): Extension<Arc<AppState>>,
    authed: AuthedUser,
    payload: Result<Json<UpdatePinRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let outcome = state.identity.update_pin(&authed.email, &request).await?;
    Ok(update_response(outcome, "PIN updated successfully"))
}

/// GET /get_device_id
pub async fn get_device_id(
    Extension(state): Extension<Arc<AppState>>,
    authed: AuthedUser,
) -> Result<Json<DeviceIdResponse>, ApiError> {
    let device_id = state.identity.device_id(&authed.email).await?;
    Ok(Json(DeviceIdResponse { device_id }))
}

// ============================================================================
// Vehicle
// ============================================================================

/// POST /update_vehicle_number
pub async fn update_vehicle_number(
    Extension(state): Extension<Arc<AppState>>,
    authed: AuthedUser,
    payload: Result<Json<UpdateVehicleNumberRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let outcome = state
        .identity
        .update_vehicle_number(&authed.email, &request)
        .await?;
    Ok(update_response(outcome, "Vehicle number updated successfully"))
}

/// GET /get_vehicle_number
pub async fn get_vehicle_number(
    Extension(state): Extension<Arc<AppState>>,
    authed: AuthedUser,
) -> Result<Json<VehicleNumberResponse>, ApiError> {
    let vehicle_number = state.identity.vehicle_number(&authed.email).await?;
    Ok(Json(VehicleNumberResponse { vehicle_number }))
}
