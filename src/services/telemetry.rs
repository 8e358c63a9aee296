// src/services/telemetry.rs
//! Append-only log of location reports, scoped by owner email

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::common::safe_email_log;
use crate::telemetry::models::{AddDataRequest, LocationReport, LogEntry, Reading};
use crate::telemetry::validators::ReadingValidator;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("Missing fields in request: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("No data found for this user")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub struct TelemetryStore {
    db: SqlitePool,
    validator: ReadingValidator,
}

impl TelemetryStore {
    pub fn new(db: SqlitePool, accept_zero_battery: bool) -> Self {
        Self {
            db,
            validator: ReadingValidator {
                accept_zero_battery,
            },
        }
    }

    /// Validates a reading and appends it, stamped with the current time
    pub async fn ingest(
        &self,
        owner_email: &str,
        request: &AddDataRequest,
    ) -> Result<LocationReport, TelemetryError> {
        let reading = self.validator.reading(request).map_err(|result| {
            warn!(
                email = %safe_email_log(owner_email),
                problems = %result.summary(),
                "Telemetry rejected: missing fields"
            );
            TelemetryError::MissingFields(result.fields())
        })?;

        self.record(owner_email, &reading, Utc::now()).await
    }

    pub(crate) async fn record(
        &self,
        owner_email: &str,
        reading: &Reading,
        at: DateTime<Utc>,
    ) -> Result<LocationReport, TelemetryError> {
        let recorded_at = at.to_rfc3339_opts(SecondsFormat::Micros, true);

        let report = sqlx::query_as::<_, LocationReport>(
            r#"
            INSERT INTO location_reports (owner_email, latitude, longitude, battery, status, recorded_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(owner_email)
        .bind(reading.latitude)
        .bind(reading.longitude)
        .bind(reading.battery)
        .bind(&reading.status)
        .bind(&recorded_at)
        .fetch_one(&self.db)
        .await?;

        info!(
            email = %safe_email_log(owner_email),
            report_id = report.id,
            status = %report.status,
            "Telemetry report stored"
        );

        Ok(report)
    }

    /// Every report for the owner, oldest insert first
    pub async fn list_all(&self, owner_email: &str) -> Result<Vec<LogEntry>, TelemetryError> {
        let logs = sqlx::query_as::<_, LogEntry>(
            "SELECT latitude, longitude, recorded_at AS timestamp FROM location_reports WHERE owner_email = ? ORDER BY id ASC",
        )
        .bind(owner_email)
        .fetch_all(&self.db)
        .await?;

        debug!(email = %safe_email_log(owner_email), count = logs.len(), "Loaded telemetry history");
        Ok(logs)
    }

    /// Most recent report by timestamp; insert order breaks ties
    pub async fn latest(&self, owner_email: &str) -> Result<LocationReport, TelemetryError> {
        sqlx::query_as::<_, LocationReport>(
            "SELECT * FROM location_reports WHERE owner_email = ? ORDER BY recorded_at DESC, id DESC LIMIT 1",
        )
        .bind(owner_email)
        .fetch_optional(&self.db)
        .await?
        .ok_or(TelemetryError::NotFound)
    }
}
