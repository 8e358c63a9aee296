// src/telemetry/validators.rs

use super::models::{AddDataRequest, Reading};
use crate::common::{ValidationResult, Validator};

/// Rejects readings whose fields are absent or zero/empty.
///
/// A battery value of exactly 0 counts as missing unless `accept_zero_battery`
/// is set. Zero latitude or longitude always counts as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingValidator {
    pub accept_zero_battery: bool,
}

impl Validator<AddDataRequest> for ReadingValidator {
    fn validate(&self, data: &AddDataRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if !is_set(data.latitude) {
            result.add_error("latitude", "Latitude is required");
        }

        if !is_set(data.longitude) {
            result.add_error("longitude", "Longitude is required");
        }

        let battery_ok = match data.battery {
            Some(level) => self.accept_zero_battery || level != 0.0,
            None => false,
        };
        if !battery_ok {
            result.add_error("battery", "Battery level is required");
        }

        if data.status.as_deref().map_or(true, str::is_empty) {
            result.add_error("status", "Status is required");
        }

        result
    }
}

impl ReadingValidator {
    /// Validates and converts in one step
    pub fn reading(&self, data: &AddDataRequest) -> Result<Reading, ValidationResult> {
        let result = self.validate(data);
        if !result.is_valid {
            return Err(result);
        }

        match (data.latitude, data.longitude, data.battery, &data.status) {
            (Some(latitude), Some(longitude), Some(battery), Some(status)) => Ok(Reading {
                latitude,
                longitude,
                battery,
                status: status.clone(),
            }),
            _ => Err(result),
        }
    }
}

fn is_set(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v != 0.0)
}
