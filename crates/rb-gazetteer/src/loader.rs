//! CSV gazetteer loader.
//!
//! # CSV format
//!
//! One row per pincode.  Extra columns are ignored.
//!
//! ```csv
//! pincode,lat,lng,city,state
//! 122003,28.4325,77.0730,Gurgaon,Haryana
//! 201301,28.5700,77.3200,Noida,Uttar Pradesh
//! ```
//!
//! Coordinates may carry surrounding whitespace (`122003, 28.4325, 77.0730`);
//! every other field is taken verbatim.
//!
//! Rows that fail to parse (non-numeric or out-of-range coordinates, empty
//! pincode) are skipped with a warning.  A missing `pincode`, `lat`, `lng`,
//! `city` or `state` header fails the whole load, since no row could be read.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use serde::{Deserialize, Deserializer};

use rb_core::{GeoPoint, Pincode};

use crate::{Gazetteer, GazetteerError, GazetteerResult, PincodeRecord};

const REQUIRED_COLUMNS: [&str; 5] = ["pincode", "lat", "lng", "city", "state"];

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PincodeRow {
    pincode: String,
    #[serde(deserialize_with = "trimmed_f64")]
    lat:     f64,
    #[serde(deserialize_with = "trimmed_f64")]
    lng:     f64,
    city:    String,
    state:   String,
}

/// Counts reported by a load.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows accepted into the gazetteer (duplicates counted once per row).
    pub loaded:     usize,
    /// Malformed rows that were skipped.
    pub skipped:    usize,
    /// Rows that replaced an earlier row with the same pincode.
    pub duplicates: usize,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a gazetteer from a CSV file.
///
/// A file that does not exist yields an empty gazetteer, not an error.  Any
/// other I/O failure is returned.
pub fn load_csv(path: &Path) -> GazetteerResult<(Gazetteer, LoadStats)> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!(
                "pincode reference file {} not found; every lookup will report an unknown pincode",
                path.display()
            );
            return Ok((Gazetteer::empty(), LoadStats::default()));
        }
        Err(e) => return Err(GazetteerError::Io(e)),
    };

    let (gazetteer, stats) = load_reader(file)?;
    log::info!(
        "Loaded {} pincodes from {} ({} malformed rows skipped)",
        gazetteer.len(),
        path.display(),
        stats.skipped
    );
    Ok((gazetteer, stats))
}

/// Like [`load_csv`] but accepts any `Read` source.
pub fn load_reader<R: Read>(reader: R) -> GazetteerResult<(Gazetteer, LoadStats)> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !headers.iter().any(|h| h == **c)) {
        return Err(GazetteerError::MissingColumn(*missing));
    }

    let mut gazetteer = Gazetteer::empty();
    let mut stats = LoadStats::default();

    for result in csv_reader.deserialize::<PincodeRow>() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("skipping malformed pincode row: {e}");
                stats.skipped += 1;
                continue;
            }
        };

        let record = match parse_row(row) {
            Ok(record) => record,
            Err(reason) => {
                log::warn!("skipping pincode row: {reason}");
                stats.skipped += 1;
                continue;
            }
        };

        if let Some(previous) = gazetteer.insert(record) {
            log::warn!("duplicate pincode {}; keeping the later row", previous.pincode);
            stats.duplicates += 1;
        }
        stats.loaded += 1;
    }

    Ok((gazetteer, stats))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn trimmed_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}

fn parse_row(row: PincodeRow) -> Result<PincodeRecord, String> {
    let pincode = Pincode::new(row.pincode).map_err(|e| e.to_string())?;
    let location = GeoPoint::checked(row.lat, row.lng).map_err(|e| format!("{pincode}: {e}"))?;
    Ok(PincodeRecord::new(pincode, location, row.city, row.state))
}
