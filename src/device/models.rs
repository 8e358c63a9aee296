// src/device/models.rs

use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Update Requests
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct UpdateDeviceIdRequest {
    pub device_id: Option<String>,
}

/// The caller must repeat the bound device id to prove they hold the device
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePinRequest {
    pub device_id: Option<String>,
    pub pin: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateVehicleNumberRequest {
    pub vehicle_number: Option<String>,
}

/// `None` means the field was absent (or null); `Some(false)` is a real value
#[derive(Debug, Default, Deserialize)]
pub struct ToggleAntiTheftRequest {
    pub anti_theft: Option<bool>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AntiTheftResponse {
    pub anti_theft: bool,
}

#[derive(Debug, Serialize)]
pub struct VehicleNumberResponse {
    pub vehicle_number: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeviceIdResponse {
    pub device_id: Option<String>,
}
