use thiserror::Error;

use rb_distance::DistanceError;

#[derive(Debug, Error)]
pub enum PricingError {
    /// Negative or non-finite distance handed to the price formula.
    #[error("invalid distance {0} km: must be finite and non-negative")]
    InvalidDistance(f64),

    #[error(transparent)]
    Distance(#[from] DistanceError),
}

pub type PricingResult<T> = Result<T, PricingError>;
