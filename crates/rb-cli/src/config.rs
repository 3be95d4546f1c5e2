//! `rbl.toml` configuration.
//!
//! ```toml
//! gazetteer_path = "data/pincodes.csv"
//!
//! [pricing]
//! base   = 300.0
//! per_km = 15.0
//! min_km = 15.0
//!
//! [factors]
//! under_5km = 1.35
//! "5_20km"  = 1.25
//!
//! [service_area]
//! serviceable = ["122003", "201301"]
//! border      = ["122413"]
//! ```
//!
//! Every key is optional; omitted keys take the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use rb_distance::DetourFactors;
use rb_gazetteer::ServiceArea;
use rb_pricing::PricingPolicy;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "rbl.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gazetteer_path: PathBuf,
    pub pricing:        PricingPolicy,
    pub factors:        DetourFactors,
    pub service_area:   ServiceArea,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gazetteer_path: PathBuf::from("data/pincodes.csv"),
            pricing:        PricingPolicy::default(),
            factors:        DetourFactors::default(),
            service_area:   ServiceArea::default(),
        }
    }
}

/// Only the `[factors]` table, as written by `rbl calibrate --write-factors`.
#[derive(Serialize)]
struct FactorsFile<'a> {
    factors: &'a DetourFactors,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load `explicit` if given (it must exist), else `rbl.toml` if present,
    /// else the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
            None => {
                log::debug!("no {DEFAULT_CONFIG_FILE}; using built-in defaults");
                return Ok(Self::default());
            }
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Render factors as a standalone `[factors]` TOML table.
pub fn factors_to_toml(factors: &DetourFactors) -> Result<String> {
    Ok(toml::to_string(&FactorsFile { factors })?)
}
