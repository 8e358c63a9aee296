// src/telemetry/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

pub fn telemetry_routes() -> Router {
    Router::new()
        .route("/add_data", post(handlers::add_data))
        .route("/logs", get(handlers::logs))
        .route("/fetch_status", get(handlers::fetch_status))
}
