// src/device/mod.rs

pub mod handlers;
pub mod models;
pub mod routes;


pub use routes::device_routes;
