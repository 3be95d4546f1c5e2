//! Thread-safe engine with copy-on-write detour factors.
//!
//! Estimation takes a cheap `Arc` snapshot of the current factor set and
//! works on it without holding any lock.  Calibration reads a snapshot
//! under an upgradable lock (so two calibrations cannot interleave), builds
//! a new set, and swaps it in.  An estimate therefore always sees one
//! complete factor set, old or new, never a half-scaled mix.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};

use rb_gazetteer::Gazetteer;

use crate::calibrate::{CalibrationReport, CalibrationSample, calibrated_factors};
use crate::engine::{RoadEstimator, estimate_with};
use crate::{DetourFactors, DistanceEngine, DistanceResult, RoadEstimate};

/// A [`DistanceEngine`] that can be shared across threads and recalibrated
/// while serving estimates.
#[derive(Debug)]
pub struct SharedDistanceEngine {
    gazetteer: Arc<Gazetteer>,
    factors:   RwLock<Arc<DetourFactors>>,
}

impl SharedDistanceEngine {
    pub fn new(gazetteer: Gazetteer, factors: DetourFactors) -> Self {
        Self {
            gazetteer: Arc::new(gazetteer),
            factors:   RwLock::new(Arc::new(factors)),
        }
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    /// Snapshot of the factor set currently in use.
    pub fn factors(&self) -> Arc<DetourFactors> {
        self.factors.read().clone()
    }

    /// Install a new factor set (e.g. one persisted by an earlier offline
    /// calibration).  Returns the set it replaced.
    pub fn replace_factors(&self, factors: DetourFactors) -> Arc<DetourFactors> {
        std::mem::replace(&mut *self.factors.write(), Arc::new(factors))
    }

    pub fn estimate(&self, origin: &str, dest: &str) -> DistanceResult<RoadEstimate> {
        let factors = self.factors();
        estimate_with(&self.gazetteer, &factors, origin, dest)
    }

    pub fn estimate_road_km(&self, origin: &str, dest: &str) -> Option<f64> {
        self.estimate(origin, dest).ok().map(|e| e.road_km)
    }

    /// Calibrate and atomically publish the new factor set.
    ///
    /// Nothing is published when no sample is usable.
    pub fn calibrate(&self, samples: &[CalibrationSample]) -> CalibrationReport {
        let current = self.factors.upgradable_read();
        let (factors, report) = calibrated_factors(&self.gazetteer, &current, samples);
        if !report.is_noop() {
            *RwLockUpgradableReadGuard::upgrade(current) = Arc::new(factors);
        }
        report
    }
}

impl RoadEstimator for SharedDistanceEngine {
    fn estimate(&self, origin: &str, dest: &str) -> DistanceResult<RoadEstimate> {
        SharedDistanceEngine::estimate(self, origin, dest)
    }
}

impl From<DistanceEngine> for SharedDistanceEngine {
    fn from(engine: DistanceEngine) -> Self {
        let (gazetteer, factors) = engine.into_parts();
        Self::new(gazetteer, factors)
    }
}
