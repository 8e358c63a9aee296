//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// JWT claims structure
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    /// Account email, the caller's identity
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// User database model
///
/// Rows created by a profile upsert only carry the email, hence the options.
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct User {
    pub email: String,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub device_id: Option<String>,
    #[serde(skip_serializing)]
    pub pin: Option<String>,
    pub vehicle_number: Option<String>,
    pub anti_theft: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// POST /register payload
#[derive(Deserialize, Debug, Default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Older clients send this as `number`
    #[serde(alias = "number")]
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

/// POST /login payload
#[derive(Deserialize, Debug, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct TokenResponse {
    pub token: String,
}
