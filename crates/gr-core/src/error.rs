//! Validation error type shared by every `gr-*` crate.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so a malformed coordinate surfaces unchanged all the
//! way up to the service facade.

use thiserror::Error;

/// Input validation failures.  Never retried; reported straight to the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid coordinate ({lat}, {lon}): latitude must be within ±90 and longitude within ±180")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("invalid time slot: hour {hour} (expected 0–23), weekday {weekday} (expected 0–6)")]
    InvalidTimeSlot { hour: u32, weekday: u32 },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Shorthand result type for validation in all `gr-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
