//! Affine delivery price with a minimum billable distance.

use serde::{Deserialize, Serialize};

use crate::{PricingError, PricingResult};

/// Price parameters, in rupees and kilometres.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingPolicy {
    pub base:   f64,
    pub per_km: f64,
    /// Distances below this are billed as this many km.
    pub min_km: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self { base: 300.0, per_km: 15.0, min_km: 15.0 }
    }
}

impl PricingPolicy {
    pub fn new(base: f64, per_km: f64, min_km: f64) -> Self {
        Self { base, per_km, min_km }
    }

    /// Price for a road distance.
    ///
    /// Fails with [`PricingError::InvalidDistance`] for negative, NaN or
    /// infinite input.
    pub fn price(&self, road_km: f64) -> PricingResult<f64> {
        if !road_km.is_finite() || road_km < 0.0 {
            return Err(PricingError::InvalidDistance(road_km));
        }
        Ok(self.base + self.per_km * self.billable_km(road_km))
    }

    /// `max(road_km, min_km)`.
    #[inline]
    pub fn billable_km(&self, road_km: f64) -> f64 {
        road_km.max(self.min_km)
    }
}

/// Price with the default policy (base 300, 15 per km, 15 km minimum).
pub fn calculate_delivery_price(road_km: f64) -> PricingResult<f64> {
    PricingPolicy::default().price(road_km)
}
