//! `rb-distance` — realistic road-distance estimates between pincodes.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`factors`]   | `DetourFactors`, `DistanceBand`                           |
//! | [`engine`]    | `DistanceEngine`, `RoadEstimate`, `RoadEstimator` trait   |
//! | [`calibrate`] | `CalibrationSample`, `CalibrationReport`, sample loader   |
//! | [`shared`]    | `SharedDistanceEngine` (copy-on-write factors)            |
//! | [`error`]     | `DistanceError`, `DistanceResult<T>`                      |
//!
//! # Model (summary)
//!
//! ```text
//! h       = haversine(origin, dest)
//! factor  = band(h) + same_city_adj? + diff_state_adj?
//! road_km = h * clamp(factor, min_clamp, max_clamp)
//! ```
//!
//! Bands are half-open: `[0,5) [5,20) [20,80) [80,250) [250,∞)` km.
//!
//! Calibration scales the five band multipliers by the mean ratio of
//! observed to estimated distance.  Adjustments and clamps are untouched.

pub mod calibrate;
pub mod engine;
pub mod error;
pub mod factors;
pub mod shared;


pub use calibrate::{
    CalibrationReport, CalibrationSample, calibrated_factors, load_samples_csv,
    load_samples_reader,
};
pub use engine::{DistanceEngine, RoadEstimate, RoadEstimator};
pub use error::{DistanceError, DistanceResult};
pub use factors::{DetourFactors, DistanceBand};
pub use shared::SharedDistanceEngine;
