//! The distance engine: gazetteer lookups plus the detour model.

use std::path::Path;

use rb_core::haversine_km;
use rb_gazetteer::{Gazetteer, PincodeRecord, load_csv};

use crate::calibrate::{CalibrationReport, CalibrationSample, calibrated_factors};
use crate::{DetourFactors, DistanceBand, DistanceError, DistanceResult};

/// Breakdown of one road-distance estimate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoadEstimate {
    pub haversine_km: f64,
    pub band:         DistanceBand,
    /// Clamped factor actually applied.
    pub factor:       f64,
    pub road_km:      f64,
}

/// Anything that can estimate the road distance of a pincode pair.
///
/// Implemented by [`DistanceEngine`] and [`crate::SharedDistanceEngine`] so
/// pricing and batch code work with either.
pub trait RoadEstimator {
    fn estimate(&self, origin: &str, dest: &str) -> DistanceResult<RoadEstimate>;
}

/// Estimates road distance between pincodes.
///
/// Owns its gazetteer (immutable) and its detour factors (mutated only by
/// [`DistanceEngine::calibrate`], which needs `&mut self`).  For an engine
/// shared across threads see [`crate::SharedDistanceEngine`].
#[derive(Clone, Debug)]
pub struct DistanceEngine {
    gazetteer: Gazetteer,
    factors:   DetourFactors,
}

impl DistanceEngine {
    pub fn new(gazetteer: Gazetteer, factors: DetourFactors) -> Self {
        Self { gazetteer, factors }
    }

    /// Engine with the built-in default factors.
    pub fn with_default_factors(gazetteer: Gazetteer) -> Self {
        Self::new(gazetteer, DetourFactors::default())
    }

    /// Load the gazetteer from `path` and build an engine.
    ///
    /// A missing file is not an error: the engine is built empty and every
    /// estimate fails with [`DistanceError::UnknownPincode`].
    pub fn from_csv(path: &Path, factors: DetourFactors) -> DistanceResult<Self> {
        let (gazetteer, _) = load_csv(path)?;
        Ok(Self::new(gazetteer, factors))
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn factors(&self) -> &DetourFactors {
        &self.factors
    }

    pub(crate) fn into_parts(self) -> (Gazetteer, DetourFactors) {
        (self.gazetteer, self.factors)
    }

    /// Great-circle distance in km between two points in degrees.
    #[inline]
    pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        haversine_km(lat1, lon1, lat2, lon2)
    }

    /// Full estimate for a pincode pair.
    pub fn estimate(&self, origin: &str, dest: &str) -> DistanceResult<RoadEstimate> {
        estimate_with(&self.gazetteer, &self.factors, origin, dest)
    }

    /// Estimated road km, or `None` when either pincode is unknown.
    pub fn estimate_road_km(&self, origin: &str, dest: &str) -> Option<f64> {
        self.estimate(origin, dest).ok().map(|e| e.road_km)
    }

    /// Scale the band multipliers by the mean observed/estimated ratio of
    /// `samples`.
    ///
    /// Leaves the factors untouched when no sample is usable; check
    /// [`CalibrationReport::retained`].  Repeated calls compose
    /// multiplicatively.
    pub fn calibrate(&mut self, samples: &[CalibrationSample]) -> CalibrationReport {
        let (factors, report) = calibrated_factors(&self.gazetteer, &self.factors, samples);
        self.factors = factors;
        report
    }
}

impl RoadEstimator for DistanceEngine {
    fn estimate(&self, origin: &str, dest: &str) -> DistanceResult<RoadEstimate> {
        DistanceEngine::estimate(self, origin, dest)
    }
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Resolve both pincodes, reporting every one that is missing.
pub(crate) fn lookup_pair<'g>(
    gazetteer: &'g Gazetteer,
    origin:    &str,
    dest:      &str,
) -> DistanceResult<(&'g PincodeRecord, &'g PincodeRecord)> {
    match (gazetteer.get(origin), gazetteer.get(dest)) {
        (Some(o), Some(d)) => Ok((o, d)),
        (o, d) => {
            let mut missing = Vec::with_capacity(2);
            if o.is_none() {
                missing.push(origin.to_owned());
            }
            if d.is_none() {
                missing.push(dest.to_owned());
            }
            Err(DistanceError::UnknownPincode(missing))
        }
    }
}

/// Apply the detour model to two resolved records.
pub(crate) fn estimate_between(
    factors: &DetourFactors,
    origin:  &PincodeRecord,
    dest:    &PincodeRecord,
) -> RoadEstimate {
    let haversine_km = origin.location.distance_km(dest.location);
    let factor = factors.factor_for(haversine_km, origin.same_city(dest), origin.same_state(dest));
    RoadEstimate {
        haversine_km,
        band: DistanceBand::for_km(haversine_km),
        factor,
        road_km: haversine_km * factor,
    }
}

pub(crate) fn estimate_with(
    gazetteer: &Gazetteer,
    factors:   &DetourFactors,
    origin:    &str,
    dest:      &str,
) -> DistanceResult<RoadEstimate> {
    let (o, d) = lookup_pair(gazetteer, origin, dest)?;
    let estimate = estimate_between(factors, o, d);
    log::debug!(
        "{origin} -> {dest}: haversine {:.3} km, band {}, factor {:.4}, road {:.3} km",
        estimate.haversine_km,
        estimate.band,
        estimate.factor,
        estimate.road_km
    );
    Ok(estimate)
}
