//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /register` - Create an account
/// - `POST /login` - Exchange credentials for a bearer token
/// - `GET /validate_token` - Check a bearer token
pub fn auth_routes() -> Router {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/validate_token", get(handlers::validate_token))
}
