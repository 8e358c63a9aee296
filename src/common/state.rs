// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::common::config::AppConfig;
use crate::services::{IdentityService, TelemetryStore};

/// Application state containing database pool, services, and configuration
///
/// Built once at startup and shared read-only; nothing in it is mutated per request.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub identity: Arc<IdentityService>,
    pub telemetry: Arc<TelemetryStore>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        let identity = Arc::new(IdentityService::new(
            db.clone(),
            config.jwt_secret.as_bytes(),
            config.token_ttl,
        ));
        let telemetry = Arc::new(TelemetryStore::new(db.clone(), config.accept_zero_battery));

        Self {
            db,
            config: Arc::new(config),
            identity,
            telemetry,
        }
    }
}
