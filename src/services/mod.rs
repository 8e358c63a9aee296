// src/services/mod.rs
//
// Services owning the two persisted entities. Each is built once at startup
// with its own store handle and shared through AppState.

pub mod identity;
pub mod telemetry;

// Re-export commonly used types for convenience
pub use identity::{IdentityError, IdentityService, UpdateOutcome};
pub use telemetry::{TelemetryError, TelemetryStore};
