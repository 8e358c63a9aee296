// src/services/identity.rs
//! Accounts, credentials and bearer tokens, plus the device profile fields
//! (device id, pin, vehicle number, anti-theft flag) stored on each account.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{Duration, SecondsFormat, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::auth::models::{Claims, LoginRequest, RegisterRequest, User};
use crate::auth::validators::{is_valid_email, is_valid_phone_number, normalize_email, present};
use crate::common::{safe_email_log, safe_token_log};
use crate::device::models::{
    ToggleAntiTheftRequest, UpdateDeviceIdRequest, UpdatePinRequest, UpdateVehicleNumberRequest,
};

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Email already exists")]
    EmailExists,

    #[error("Invalid phone number format")]
    InvalidPhoneNumber,

    #[error("Number already registered")]
    PhoneExists,

    #[error("Email and password are required")]
    MissingCredentials,

    /// Returned for unknown emails and wrong passwords alike
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid or expired token")]
    Unauthorized,

    #[error("Missing device_id")]
    MissingDeviceId,

    #[error("Device ID does not match the registered device")]
    Forbidden,

    #[error("Missing vehicle_number")]
    MissingVehicleNumber,

    #[error("Missing anti_theft value")]
    MissingValue,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Token encoding failed: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),
}

/// Result of a profile upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A row was created or a stored value changed
    Updated,
    /// The stored value already matched; nothing was written
    Unchanged,
}

/// Profile columns that can be upserted independently
#[derive(Debug, Clone, Copy)]
enum ProfileField {
    DeviceId,
    VehicleNumber,
    AntiTheft,
}

impl ProfileField {
    fn column(self) -> &'static str {
        match self {
            ProfileField::DeviceId => "device_id",
            ProfileField::VehicleNumber => "vehicle_number",
            ProfileField::AntiTheft => "anti_theft",
        }
    }
}

enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

pub struct IdentityService {
    db: SqlitePool,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl IdentityService {
    pub fn new(db: SqlitePool, secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            db,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_ttl,
        }
    }

    // ========================================================================
    // Registration and login
    // ========================================================================

    /// Creates an account. Checks run in a fixed order so the first violated
    /// rule decides the error: required fields, email format, email taken,
    /// phone format, phone taken.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), IdentityError> {
        let (Some(name), Some(raw_email), Some(password)) = (
            present(&request.name),
            present(&request.email),
            present(&request.password),
        ) else {
            return Err(IdentityError::MissingFields);
        };

        let email = normalize_email(raw_email);
        if !is_valid_email(&email) {
            return Err(IdentityError::InvalidEmail);
        }

        if self.email_exists(&email).await? {
            debug!(email = %safe_email_log(&email), "Registration rejected: email taken");
            return Err(IdentityError::EmailExists);
        }

        let phone_number = request.phone_number.as_deref().map(str::trim).unwrap_or("");
        if !is_valid_phone_number(phone_number) {
            return Err(IdentityError::InvalidPhoneNumber);
        }

        if self.phone_exists(phone_number).await? {
            debug!(email = %safe_email_log(&email), "Registration rejected: phone number taken");
            return Err(IdentityError::PhoneExists);
        }

        let password_hash = hash_password(password)?;

        sqlx::query(
            "INSERT INTO users (email, name, phone_number, password_hash, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&email)
        .bind(name.trim())
        .bind(phone_number)
        .bind(&password_hash)
        .bind(now_timestamp())
        .execute(&self.db)
        .await
        .map_err(map_unique_violation)?;

        info!(email = %safe_email_log(&email), "User registered");
        Ok(())
    }

    /// Verifies credentials and issues a bearer token for the account email
    pub async fn authenticate(&self, request: &LoginRequest) -> Result<String, IdentityError> {
        let (Some(raw_email), Some(password)) =
            (present(&request.email), present(&request.password))
        else {
            return Err(IdentityError::MissingCredentials);
        };

        let email = normalize_email(raw_email);
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(&email)
            .fetch_optional(&self.db)
            .await?;

        // Rows created by a profile upsert have no password and never verify
        let verified = user
            .as_ref()
            .and_then(|u| u.password_hash.as_deref())
            .is_some_and(|hash| verify_password(password, hash));

        if !verified {
            warn!(email = %safe_email_log(&email), "Login failed");
            return Err(IdentityError::InvalidCredentials);
        }

        let token = self.issue_token(&email)?;
        info!(email = %safe_email_log(&email), "Login successful");
        Ok(token)
    }

    pub fn issue_token(&self, email: &str) -> Result<String, IdentityError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + self.token_ttl).timestamp() as usize,
        };

        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Resolves a bearer token to the email it was issued for
    pub fn validate_token(&self, token: &str) -> Result<String, IdentityError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims.sub)
            .map_err(|e| {
                warn!(error = %e, token = %safe_token_log(token), "JWT token validation failed");
                IdentityError::Unauthorized
            })
    }

    // ========================================================================
    // Profile updates
    // ========================================================================

    pub async fn update_device_id(
        &self,
        email: &str,
        request: &UpdateDeviceIdRequest,
    ) -> Result<UpdateOutcome, IdentityError> {
        let device_id = present(&request.device_id).ok_or(IdentityError::MissingDeviceId)?;
        self.upsert_field(email, ProfileField::DeviceId, FieldValue::Text(device_id))
            .await
    }

    /// Sets the pin only when the supplied device id matches the bound one
    pub async fn update_pin(
        &self,
        email: &str,
        request: &UpdatePinRequest,
    ) -> Result<UpdateOutcome, IdentityError> {
        let (Some(device_id), Some(pin)) = (present(&request.device_id), present(&request.pin))
        else {
            return Err(IdentityError::MissingFields);
        };

        if self.device_id(email).await?.as_deref() != Some(device_id) {
            warn!(email = %safe_email_log(email), "Pin update rejected: device id mismatch");
            return Err(IdentityError::Forbidden);
        }

        // device_id is repeated so a concurrent rebind cannot slip a pin onto
        // a different device
        let result = sqlx::query(
            "UPDATE users SET pin = ?, updated_at = ? WHERE email = ? AND device_id = ? AND pin IS NOT ?",
        )
        .bind(pin)
        .bind(now_timestamp())
        .bind(email)
        .bind(device_id)
        .bind(pin)
        .execute(&self.db)
        .await?;

        Ok(outcome(result.rows_affected(), email, "pin"))
    }

    pub async fn update_vehicle_number(
        &self,
        email: &str,
        request: &UpdateVehicleNumberRequest,
    ) -> Result<UpdateOutcome, IdentityError> {
        let vehicle_number =
            present(&request.vehicle_number).ok_or(IdentityError::MissingVehicleNumber)?;
        self.upsert_field(
            email,
            ProfileField::VehicleNumber,
            FieldValue::Text(vehicle_number),
        )
        .await
    }

    pub async fn set_anti_theft(
        &self,
        email: &str,
        request: &ToggleAntiTheftRequest,
    ) -> Result<UpdateOutcome, IdentityError> {
        let enabled = request.anti_theft.ok_or(IdentityError::MissingValue)?;
        self.upsert_field(email, ProfileField::AntiTheft, FieldValue::Flag(enabled))
            .await
    }

    // ========================================================================
    // Profile reads
    // ========================================================================

    /// `false` when the flag was never set or the account row is missing
    pub async fn anti_theft(&self, email: &str) -> Result<bool, IdentityError> {
        let row: Option<(Option<bool>,)> =
            sqlx::query_as("SELECT anti_theft FROM users WHERE email = ?")
                .bind(email)
                .fetch_optional(&self.db)
                .await?;

        Ok(row.and_then(|(flag,)| flag).unwrap_or(false))
    }

    pub async fn vehicle_number(&self, email: &str) -> Result<Option<String>, IdentityError> {
        self.text_field(email, ProfileField::VehicleNumber).await
    }

    pub async fn device_id(&self, email: &str) -> Result<Option<String>, IdentityError> {
        self.text_field(email, ProfileField::DeviceId).await
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn email_exists(&self, email: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(String,)> = sqlx::query_as("SELECT email FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;
        Ok(row.is_some())
    }

    async fn phone_exists(&self, phone_number: &str) -> Result<bool, sqlx::Error> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT email FROM users WHERE phone_number = ?")
                .bind(phone_number)
                .fetch_optional(&self.db)
                .await?;
        Ok(row.is_some())
    }

    async fn text_field(
        &self,
        email: &str,
        field: ProfileField,
    ) -> Result<Option<String>, IdentityError> {
        let sql = format!("SELECT {} FROM users WHERE email = ?", field.column());
        let row: Option<(Option<String>,)> = sqlx::query_as(&sql)
            .bind(email)
            .fetch_optional(&self.db)
            .await?;

        Ok(row.and_then(|(value,)| value))
    }

    /// Creates the account row if missing, otherwise writes the column only
    /// when its value differs. Zero affected rows means nothing changed.
    async fn upsert_field(
        &self,
        email: &str,
        field: ProfileField,
        value: FieldValue<'_>,
    ) -> Result<UpdateOutcome, IdentityError> {
        let column = field.column();
        let sql = format!(
            "INSERT INTO users (email, {column}, created_at, updated_at) VALUES (?, ?, ?, ?) \
             ON CONFLICT(email) DO UPDATE SET {column} = excluded.{column}, updated_at = excluded.updated_at \
             WHERE users.{column} IS NOT excluded.{column}"
        );

        let now = now_timestamp();
        let query = sqlx::query(&sql).bind(email);
        let query = match value {
            FieldValue::Text(text) => query.bind(text),
            FieldValue::Flag(flag) => query.bind(flag),
        };
        let result = query.bind(&now).bind(&now).execute(&self.db).await?;

        Ok(outcome(result.rows_affected(), email, column))
    }
}

fn outcome(rows_affected: u64, email: &str, column: &str) -> UpdateOutcome {
    if rows_affected > 0 {
        info!(email = %safe_email_log(email), field = column, "Profile field updated");
        UpdateOutcome::Updated
    } else {
        debug!(email = %safe_email_log(email), field = column, "Profile field unchanged");
        UpdateOutcome::Unchanged
    }
}

fn hash_password(password: &str) -> Result<String, IdentityError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| IdentityError::PasswordHash(e.to_string()))
}

fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            warn!(error = %e, "Stored password hash is malformed");
            false
        }
    }
}

/// A racing registration can pass the existence checks and still hit the
/// UNIQUE constraints on insert
fn map_unique_violation(err: sqlx::Error) -> IdentityError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return if db_err.message().contains("phone_number") {
                IdentityError::PhoneExists
            } else {
                IdentityError::EmailExists
            };
        }
    }
    IdentityError::Database(err)
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::migrations::test_support::setup_test_db;

    const SECRET: &[u8] = b"test_secret_key";

    async fn service() -> IdentityService {
        IdentityService::new(setup_test_db().await, SECRET, Duration::days(7))
    }

    fn registration(email: &str, phone: &str) -> RegisterRequest {
        RegisterRequest {
            name: Some("Test Rider".to_string()),
            email: Some(email.to_string()),
            phone_number: Some(phone.to_string()),
            password: Some("correct horse".to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_password() {
        let service = service().await;
        service
            .register(&registration("rider@example.com", "5551234567"))
            .await
            .unwrap();

        let (hash,): (String,) =
            sqlx::query_as("SELECT password_hash FROM users WHERE email = 'rider@example.com'")
                .fetch_one(&service.db)
                .await
                .unwrap();
        assert_ne!(hash, "correct horse");
        assert!(hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let service = service().await;
        service
            .register(&registration("rider@example.com", "5551234567"))
            .await
            .unwrap();

        let mut second = registration("rider@example.com", "5559999999");
        second.name = Some("Someone Else".to_string());
        let err = service.register(&second).await.unwrap_err();
        assert!(matches!(err, IdentityError::EmailExists));
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_case_insensitive() {
        let service = service().await;
        service
            .register(&registration("rider@example.com", "5551234567"))
            .await
            .unwrap();

        let err = service
            .register(&registration("Rider@Example.COM", "5559999999"))
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::EmailExists));
    }

    #[tokio::test]
    async fn test_register_duplicate_phone_conflicts() {
        let service = service().await;
        service
            .register(&registration("one@example.com", "5551234567"))
            .await
            .unwrap();

        let err = service
            .register(&registration("two@example.com", "5551234567"))
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::PhoneExists));
    }

    #[tokio::test]
    async fn test_register_rejects_bad_phone_numbers() {
        let service = service().await;
        for phone in ["12345", "12345678901", "abcdefghij", "555-123-45", ""] {
            let err = service
                .register(&registration("rider@example.com", phone))
                .await
                .unwrap_err();
            assert!(
                matches!(err, IdentityError::InvalidPhoneNumber),
                "{phone:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_register_missing_phone_is_invalid_phone() {
        let service = service().await;
        let mut request = registration("rider@example.com", "");
        request.phone_number = None;

        let err = service.register(&request).await.unwrap_err();
        assert!(matches!(err, IdentityError::InvalidPhoneNumber));
    }

    #[tokio::test]
    async fn test_register_check_order() {
        let service = service().await;
        service
            .register(&registration("taken@example.com", "5551234567"))
            .await
            .unwrap();

        // missing fields beat a bad email
        let mut request = registration("not-an-email", "123");
        request.password = None;
        assert!(matches!(
            service.register(&request).await.unwrap_err(),
            IdentityError::MissingFields
        ));

        // bad email beats bad phone
        assert!(matches!(
            service
                .register(&registration("not-an-email", "123"))
                .await
                .unwrap_err(),
            IdentityError::InvalidEmail
        ));

        // taken email beats bad phone
        assert!(matches!(
            service
                .register(&registration("taken@example.com", "123"))
                .await
                .unwrap_err(),
            IdentityError::EmailExists
        ));
    }

    #[tokio::test]
    async fn test_authenticate_errors_are_indistinguishable() {
        let service = service().await;
        service
            .register(&registration("rider@example.com", "5551234567"))
            .await
            .unwrap();

        let wrong_password = service
            .authenticate(&LoginRequest {
                email: Some("rider@example.com".to_string()),
                password: Some("wrong".to_string()),
            })
            .await
            .unwrap_err();
        let unknown_email = service
            .authenticate(&LoginRequest {
                email: Some("ghost@example.com".to_string()),
                password: Some("correct horse".to_string()),
            })
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, IdentityError::InvalidCredentials));
        assert!(matches!(unknown_email, IdentityError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_authenticate_missing_credentials() {
        let service = service().await;
        let err = service
            .authenticate(&LoginRequest {
                email: Some("rider@example.com".to_string()),
                password: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::MissingCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_issues_valid_token() {
        let service = service().await;
        service
            .register(&registration("rider@example.com", "5551234567"))
            .await
            .unwrap();

        let token = service
            .authenticate(&LoginRequest {
                email: Some("RIDER@example.com".to_string()),
                password: Some("correct horse".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(service.validate_token(&token).unwrap(), "rider@example.com");
    }

    #[tokio::test]
    async fn test_upsert_only_account_cannot_login() {
        let service = service().await;
        service
            .update_device_id(
                "stub@example.com",
                &UpdateDeviceIdRequest {
                    device_id: Some("GPS-1".to_string()),
                },
            )
            .await
            .unwrap();

        let err = service
            .authenticate(&LoginRequest {
                email: Some("stub@example.com".to_string()),
                password: Some("anything".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_token_lifetime_is_seven_days() {
        let service = service().await;
        let token = service.issue_token("rider@example.com").unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(SECRET),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();
        assert_eq!(
            data.claims.exp - data.claims.iat,
            Duration::days(7).num_seconds() as usize
        );
    }

    #[tokio::test]
    async fn test_validate_token_rejects_tampered_and_expired() {
        let service = service().await;
        let token = service.issue_token("rider@example.com").unwrap();

        let (signed, signature) = token.rsplit_once('.').unwrap();
        let mut chars: Vec<char> = signature.chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        let tampered = format!("{}.{}", signed, chars.into_iter().collect::<String>());
        assert!(matches!(
            service.validate_token(&tampered),
            Err(IdentityError::Unauthorized)
        ));

        let issued = Utc::now() - Duration::days(8);
        let expired = encode(
            &Header::new(Algorithm::HS256),
            &Claims {
                sub: "rider@example.com".to_string(),
                iat: issued.timestamp() as usize,
                exp: (issued + Duration::days(7)).timestamp() as usize,
            },
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        assert!(matches!(
            service.validate_token(&expired),
            Err(IdentityError::Unauthorized)
        ));

        assert!(matches!(
            service.validate_token("not-a-jwt"),
            Err(IdentityError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_validate_token_rejects_other_secret() {
        let service = service().await;
        let other = IdentityService::new(service.db.clone(), b"other_secret", Duration::days(7));
        let token = other.issue_token("rider@example.com").unwrap();

        assert!(service.validate_token(&token).is_err());
    }

    #[tokio::test]
    async fn test_vehicle_number_upsert_then_noop() {
        let service = service().await;
        let request = UpdateVehicleNumberRequest {
            vehicle_number: Some("KA01AB1234".to_string()),
        };

        assert_eq!(
            service
                .update_vehicle_number("rider@example.com", &request)
                .await
                .unwrap(),
            UpdateOutcome::Updated
        );
        assert_eq!(
            service
                .update_vehicle_number("rider@example.com", &request)
                .await
                .unwrap(),
            UpdateOutcome::Unchanged
        );
        assert_eq!(
            service.vehicle_number("rider@example.com").await.unwrap(),
            Some("KA01AB1234".to_string())
        );
    }

    #[tokio::test]
    async fn test_anti_theft_tristate() {
        let service = service().await;
        service
            .register(&registration("rider@example.com", "5551234567"))
            .await
            .unwrap();

        assert!(!service.anti_theft("rider@example.com").await.unwrap());

        let missing = service
            .set_anti_theft("rider@example.com", &ToggleAntiTheftRequest { anti_theft: None })
            .await
            .unwrap_err();
        assert!(matches!(missing, IdentityError::MissingValue));

        // an explicit false on a never-set flag is a write, not a missing value
        assert_eq!(
            service
                .set_anti_theft(
                    "rider@example.com",
                    &ToggleAntiTheftRequest {
                        anti_theft: Some(false)
                    }
                )
                .await
                .unwrap(),
            UpdateOutcome::Updated
        );

        service
            .set_anti_theft(
                "rider@example.com",
                &ToggleAntiTheftRequest {
                    anti_theft: Some(true),
                },
            )
            .await
            .unwrap();
        assert!(service.anti_theft("rider@example.com").await.unwrap());

        assert_eq!(
            service
                .set_anti_theft(
                    "rider@example.com",
                    &ToggleAntiTheftRequest {
                        anti_theft: Some(true)
                    }
                )
                .await
                .unwrap(),
            UpdateOutcome::Unchanged
        );
    }

    #[tokio::test]
    async fn test_pin_requires_matching_device() {
        let service = service().await;
        let email = "rider@example.com";
        service
            .register(&registration(email, "5551234567"))
            .await
            .unwrap();

        let request = UpdatePinRequest {
            device_id: Some("GPS-1".to_string()),
            pin: Some("4321".to_string()),
        };

        // no device bound yet
        assert!(matches!(
            service.update_pin(email, &request).await.unwrap_err(),
            IdentityError::Forbidden
        ));

        service
            .update_device_id(
                email,
                &UpdateDeviceIdRequest {
                    device_id: Some("GPS-2".to_string()),
                },
            )
            .await
            .unwrap();
        assert!(matches!(
            service.update_pin(email, &request).await.unwrap_err(),
            IdentityError::Forbidden
        ));

        service
            .update_device_id(
                email,
                &UpdateDeviceIdRequest {
                    device_id: Some("GPS-1".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(
            service.update_pin(email, &request).await.unwrap(),
            UpdateOutcome::Updated
        );
        assert_eq!(
            service.update_pin(email, &request).await.unwrap(),
            UpdateOutcome::Unchanged
        );
    }

    #[tokio::test]
    async fn test_pin_missing_fields() {
        let service = service().await;
        let err = service
            .update_pin(
                "rider@example.com",
                &UpdatePinRequest {
                    device_id: Some("GPS-1".to_string()),
                    pin: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, IdentityError::MissingFields));
    }

    #[tokio::test]
    async fn test_device_id_reads() {
        let service = service().await;
        assert_eq!(service.device_id("rider@example.com").await.unwrap(), None);

        assert!(matches!(
            service
                .update_device_id("rider@example.com", &UpdateDeviceIdRequest::default())
                .await
                .unwrap_err(),
            IdentityError::MissingDeviceId
        ));

        service
            .update_device_id(
                "rider@example.com",
                &UpdateDeviceIdRequest {
                    device_id: Some("GPS-1".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(
            service.device_id("rider@example.com").await.unwrap(),
            Some("GPS-1".to_string())
        );
    }
}
