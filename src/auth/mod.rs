//! # Auth Module
//!
//! This module handles account registration and login:
//! - Password-based registration with ordered validation
//! - JWT token issuance and validation
//! - AuthedUser extractor for protected routes

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;


pub use extractors::AuthedUser;
pub use routes::auth_routes;
