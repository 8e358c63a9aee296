// src/health.rs
//! Liveness/readiness probe

use axum::{extract::Extension, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use crate::common::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// "ok" or "unavailable"
    pub status: &'static str,
    pub version: &'static str,
    pub database: bool,
}

/// GET /health - 200 when the database answers, 503 otherwise
pub async fn health(Extension(state): Extension<Arc<AppState>>) -> (StatusCode, Json<HealthStatus>) {
    let database = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => true,
        Err(e) => {
            error!(error = %e, "Health check: database unreachable");
            false
        }
    };

    let (code, status) = if database {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        code,
        Json(HealthStatus {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}
