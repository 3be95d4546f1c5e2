//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where they need coordinate validation.

use thiserror::Error;

/// Errors produced while building core values from untrusted input.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("latitude {0} is not a finite value in [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is not a finite value in [-180, 180]")]
    InvalidLongitude(f64),

    #[error("pincode is empty")]
    EmptyPincode,
}

/// Shorthand result type for `rb-core`.
pub type CoreResult<T> = Result<T, CoreError>;
