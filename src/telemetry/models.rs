// src/telemetry/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Stored Records
// ============================================================================

/// One immutable location/battery/status observation
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LocationReport {
    pub id: i64,
    pub owner_email: String,
    pub latitude: f64,
    pub longitude: f64,
    pub battery: f64,
    pub status: String,
    pub recorded_at: String,
}

// ============================================================================
// Request / Response Models
// ============================================================================

/// POST /add_data payload, as sent by the tracker firmware
#[derive(Debug, Default, Deserialize)]
pub struct AddDataRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub battery: Option<f64>,
    pub status: Option<String>,
}

/// A reading that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub latitude: f64,
    pub longitude: f64,
    pub battery: f64,
    pub status: String,
}

/// History entry; battery and status are left out of the history view
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct LogEntry {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub logs: Vec<LogEntry>,
}

/// GET /fetch_status body
#[derive(Debug, Serialize, PartialEq)]
pub struct StatusResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub battery: f64,
    pub status: String,
    pub timestamp: String,
}

impl From<LocationReport> for StatusResponse {
    fn from(report: LocationReport) -> Self {
        Self {
            latitude: report.latitude,
            longitude: report.longitude,
            battery: report.battery,
            status: report.status,
            timestamp: report.recorded_at,
        }
    }
}
