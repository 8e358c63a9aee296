// src/auth/validators.rs

use regex::Regex;
use std::sync::LazyLock;

// ASCII only; `\d` would also accept other Unicode digits
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone regex is valid"));

/// Loose format check: the address must contain both `@` and `.`
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Exactly ten ASCII digits
pub fn is_valid_phone_number(number: &str) -> bool {
    PHONE_PATTERN.is_match(number)
}

/// Emails are compared case-insensitively
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Treats missing and blank strings alike
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
