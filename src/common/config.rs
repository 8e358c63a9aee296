// src/common/config.rs
//! Process configuration loaded from the environment

use chrono::Duration;
use rand::{distributions::Alphanumeric, Rng};
use std::env;
use tracing::warn;

const DEFAULT_DATABASE_URL: &str = "sqlite://gpsx.db";
const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub port: u16,
    /// `None` allows any origin
    pub cors_origins: Option<Vec<String>>,
    /// Battery readings of exactly 0 are rejected as missing unless set
    pub accept_zero_battery: bool,
    pub reset_db: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ => {
                warn!("JWT_SECRET not set; generated a per-process secret, tokens will not survive a restart");
                generate_secret()
            }
        };

        let token_ttl_days = env::var("TOKEN_TTL_DAYS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|days| *days > 0)
            .unwrap_or(DEFAULT_TOKEN_TTL_DAYS);

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = parse_origins(&env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()));

        Self {
            database_url,
            jwt_secret,
            token_ttl: Duration::days(token_ttl_days),
            port,
            cors_origins,
            accept_zero_battery: env_flag("ACCEPT_ZERO_BATTERY"),
            reset_db: env_flag("RESET_DB"),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key)
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        None
    } else {
        Some(origins)
    }
}

/// 64 random alphanumeric characters
pub fn generate_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
