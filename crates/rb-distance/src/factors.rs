//! Detour-factor model.
//!
//! Straight-line distance undercounts road travel, and the undercount
//! shrinks with distance: short trips wind through local streets, long
//! trips follow highways.  Each distance band carries its own multiplier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Haversine distance band, half-open `[lower, upper)` in km.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DistanceBand {
    Under5,
    From5To20,
    From20To80,
    From80To250,
    Over250,
}

impl DistanceBand {
    /// All bands in ascending distance order.
    pub const ALL: [DistanceBand; 5] = [
        DistanceBand::Under5,
        DistanceBand::From5To20,
        DistanceBand::From20To80,
        DistanceBand::From80To250,
        DistanceBand::Over250,
    ];

    /// Band for a haversine distance.  Edge values belong to the upper band:
    /// exactly `5.0` is `From5To20`.
    pub fn for_km(haversine_km: f64) -> Self {
        if haversine_km < 5.0 {
            DistanceBand::Under5
        } else if haversine_km < 20.0 {
            DistanceBand::From5To20
        } else if haversine_km < 80.0 {
            DistanceBand::From20To80
        } else if haversine_km < 250.0 {
            DistanceBand::From80To250
        } else {
            DistanceBand::Over250
        }
    }

    /// Key used in config files and reports.
    pub fn key(self) -> &'static str {
        match self {
            DistanceBand::Under5      => "under_5km",
            DistanceBand::From5To20   => "5_20km",
            DistanceBand::From20To80  => "20_80km",
            DistanceBand::From80To250 => "80_250km",
            DistanceBand::Over250     => "over_250km",
        }
    }
}

impl fmt::Display for DistanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Tunable detour parameters.
///
/// Stored values may sit outside `[min_clamp, max_clamp]` (calibration can
/// push a band multiplier past a bound); the clamp is applied when a factor
/// is computed, never at rest.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetourFactors {
    pub under_5km:      f64,
    #[serde(rename = "5_20km")]
    pub from_5_20km:    f64,
    #[serde(rename = "20_80km")]
    pub from_20_80km:   f64,
    #[serde(rename = "80_250km")]
    pub from_80_250km:  f64,
    pub over_250km:     f64,
    /// Added when origin and destination share a city (usually negative).
    pub same_city_adj:  f64,
    /// Added when origin and destination are in different states.
    pub diff_state_adj: f64,
    pub min_clamp:      f64,
    pub max_clamp:      f64,
}

impl Default for DetourFactors {
    fn default() -> Self {
        Self {
            under_5km:      1.35,
            from_5_20km:    1.25,
            from_20_80km:   1.18,
            from_80_250km:  1.12,
            over_250km:     1.08,
            same_city_adj:  -0.05,
            diff_state_adj: 0.03,
            min_clamp:      1.05,
            max_clamp:      1.45,
        }
    }
}

impl DetourFactors {
    /// Stored multiplier for a band.
    pub fn band(&self, band: DistanceBand) -> f64 {
        match band {
            DistanceBand::Under5      => self.under_5km,
            DistanceBand::From5To20   => self.from_5_20km,
            DistanceBand::From20To80  => self.from_20_80km,
            DistanceBand::From80To250 => self.from_80_250km,
            DistanceBand::Over250     => self.over_250km,
        }
    }

    fn band_mut(&mut self, band: DistanceBand) -> &mut f64 {
        match band {
            DistanceBand::Under5      => &mut self.under_5km,
            DistanceBand::From5To20   => &mut self.from_5_20km,
            DistanceBand::From20To80  => &mut self.from_20_80km,
            DistanceBand::From80To250 => &mut self.from_80_250km,
            DistanceBand::Over250     => &mut self.over_250km,
        }
    }

    /// Multiply every band multiplier by `multiplier`.  Adjustments and
    /// clamps are left as they are.
    pub fn scale_bands(&mut self, multiplier: f64) {
        for band in DistanceBand::ALL {
            *self.band_mut(band) *= multiplier;
        }
    }

    /// Clamped detour factor for a trip.
    pub fn factor_for(&self, haversine_km: f64, same_city: bool, same_state: bool) -> f64 {
        let mut factor = self.band(DistanceBand::for_km(haversine_km));
        if same_city {
            factor += self.same_city_adj;
        }
        if !same_state {
            factor += self.diff_state_adj;
        }
        // Not `f64::clamp`: that panics when min_clamp > max_clamp.
        factor.min(self.max_clamp).max(self.min_clamp)
    }
}
