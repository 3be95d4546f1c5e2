//! Offline calibration of detour factors against observed road distances.
//!
//! # CSV format
//!
//! ```csv
//! origin,dest,actual_km
//! 122003,201301,52.5
//! 122003,122018,12.0
//! ```
//!
//! The correction is one global multiplier: the mean of
//! `actual_km / estimated_km` over usable samples, applied to all five band
//! multipliers.  It cannot fix bias that differs between bands.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rb_gazetteer::Gazetteer;

use crate::engine::{estimate_between, lookup_pair};
use crate::{DetourFactors, DistanceError, DistanceResult};

const REQUIRED_COLUMNS: [&str; 3] = ["origin", "dest", "actual_km"];

/// One observed road distance for a pincode pair.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CalibrationSample {
    pub origin:    String,
    pub dest:      String,
    pub actual_km: f64,
}

impl CalibrationSample {
    pub fn new(origin: impl Into<String>, dest: impl Into<String>, actual_km: f64) -> Self {
        Self { origin: origin.into(), dest: dest.into(), actual_km }
    }
}

/// Outcome of one calibration pass.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CalibrationReport {
    /// Samples that contributed a ratio.
    pub retained: usize,
    /// Samples with an unknown pincode, a zero estimate, or an unusable
    /// observed distance.
    pub skipped:  usize,
    /// Multiplier applied to the band factors; `None` when nothing changed.
    pub avg_bias: Option<f64>,
}

impl CalibrationReport {
    /// True when no sample was usable and the factors were left unchanged.
    pub fn is_noop(&self) -> bool {
        self.retained == 0
    }
}

/// Compute calibrated factors without mutating anything.
///
/// Returns `factors` unchanged (bit for bit) when no sample is usable.
pub fn calibrated_factors(
    gazetteer: &Gazetteer,
    factors:   &DetourFactors,
    samples:   &[CalibrationSample],
) -> (DetourFactors, CalibrationReport) {
    let mut report = CalibrationReport::default();
    let mut ratio_sum = 0.0;

    for sample in samples {
        if !sample.actual_km.is_finite() || sample.actual_km < 0.0 {
            log::warn!(
                "ignoring calibration sample {} -> {}: actual_km {} is not a distance",
                sample.origin,
                sample.dest,
                sample.actual_km
            );
            report.skipped += 1;
            continue;
        }

        let Ok((o, d)) = lookup_pair(gazetteer, &sample.origin, &sample.dest) else {
            report.skipped += 1;
            continue;
        };

        let estimated = estimate_between(factors, o, d).road_km;
        if estimated <= 0.0 {
            report.skipped += 1;
            continue;
        }

        ratio_sum += sample.actual_km / estimated;
        report.retained += 1;
    }

    if report.retained == 0 {
        log::info!("no usable calibration samples ({} skipped); factors unchanged", report.skipped);
        return (*factors, report);
    }

    let avg_bias = ratio_sum / report.retained as f64;
    let mut calibrated = *factors;
    calibrated.scale_bands(avg_bias);
    report.avg_bias = Some(avg_bias);

    log::info!(
        "Calibrated factors by multiplier {avg_bias:.4} ({} samples used, {} skipped)",
        report.retained,
        report.skipped
    );
    (calibrated, report)
}

/// Load calibration samples from a CSV file.
///
/// Unlike the gazetteer, a missing sample file is an error.
pub fn load_samples_csv(path: &Path) -> DistanceResult<Vec<CalibrationSample>> {
    let file = File::open(path)?;
    let samples = load_samples_reader(file)?;
    log::info!("Loaded {} calibration samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Like [`load_samples_csv`] but accepts any `Read` source.
///
/// Malformed rows, including negative or non-finite `actual_km`, are
/// skipped with a warning.
pub fn load_samples_reader<R: Read>(reader: R) -> DistanceResult<Vec<CalibrationSample>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !headers.iter().any(|h| h == **c)) {
        return Err(DistanceError::MissingColumn(*missing));
    }

    let mut samples = Vec::new();
    for result in csv_reader.deserialize::<CalibrationSample>() {
        match result {
            Ok(s) if s.actual_km.is_finite() && s.actual_km >= 0.0 => samples.push(s),
            Ok(s) => log::warn!(
                "skipping calibration row {} -> {}: invalid actual_km {}",
                s.origin,
                s.dest,
                s.actual_km
            ),
            Err(e) => log::warn!("skipping malformed calibration row: {e}"),
        }
    }
    Ok(samples)
}
