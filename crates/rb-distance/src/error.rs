//! Distance-subsystem error type.

use thiserror::Error;

use rb_gazetteer::GazetteerError;

/// Errors produced by `rb-distance`.
#[derive(Debug, Error)]
pub enum DistanceError {
    /// One or both pincodes of a pair are absent from the gazetteer.
    #[error("pincode not found: {}", .0.join(", "))]
    UnknownPincode(Vec<String>),

    #[error("calibration samples are missing required column {0:?}")]
    MissingColumn(&'static str),

    #[error(transparent)]
    Gazetteer(#[from] GazetteerError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DistanceResult<T> = Result<T, DistanceError>;
