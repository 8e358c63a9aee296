// src/device/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

pub fn device_routes() -> Router {
    Router::new()
        // Anti-theft flag
        .route("/toggle_anti_theft", post(handlers::toggle_anti_theft))
        .route("/get_anti_theft", get(handlers::get_anti_theft))
        // Device binding
        .route("/update_device_id", post(handlers::update_device_id))
        .route("/update_pin", post(handlers::update_pin))
        .route("/get_device_id", get(handlers::get_device_id))
        // Vehicle
        .route("/update_vehicle_number", post(handlers::update_vehicle_number))
        .route("/get_vehicle_number", get(handlers::get_vehicle_number))
}
