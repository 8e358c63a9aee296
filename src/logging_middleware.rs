// src/logging_middleware.rs
//! Middleware for logging request and response bodies at debug level

use axum::body::to_bytes;
use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::{debug, enabled, Level};

use crate::common::helpers::redact_secrets;

/// Logs JSON bodies with credential fields redacted; skipped entirely
/// unless debug logging is on
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    if !enabled!(Level::DEBUG) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(body_str) = loggable_body(&bytes) {
        debug!(
            method = %parts.method,
            uri = %parts.uri,
            request_body = %body_str,
            "Request"
        );
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(body_str) = loggable_body(&bytes) {
        debug!(
            status = %parts.status,
            response_body = %body_str,
            "Response"
        );
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

/// Pretty JSON with secrets replaced, raw text otherwise
fn loggable_body(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }

    let body_str = std::str::from_utf8(bytes).ok()?;
    match serde_json::from_str::<serde_json::Value>(body_str) {
        Ok(mut json) => {
            redact_secrets(&mut json);
            Some(serde_json::to_string_pretty(&json).unwrap_or_else(|_| "<unprintable>".to_string()))
        }
        Err(_) => Some(body_str.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loggable_body_redacts_password() {
        let logged = loggable_body(br#"{"email":"a@b.co","password":"hunter2"}"#).unwrap();
        assert!(logged.contains("a@b.co"));
        assert!(!logged.contains("hunter2"));
    }

    #[test]
    fn test_loggable_body_skips_empty() {
        assert_eq!(loggable_body(b""), None);
        assert_eq!(loggable_body(b"plain"), Some("plain".to_string()));
    }
}
