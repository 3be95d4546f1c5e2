//! Delivery service-area classification by pincode.
//!
//! Independent of the distance model: a pincode can be in the gazetteer and
//! still be outside the area the business delivers to, or vice versa.

use std::collections::BTreeSet;

/// Where a pincode sits relative to the delivery area.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Serviceability {
    Serviceable,
    /// On the edge of the area; sales must confirm before promising delivery.
    Border,
    NotServiceable,
}

/// Configured sets of serviceable and border pincodes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServiceArea {
    pub serviceable: BTreeSet<String>,
    pub border:      BTreeSet<String>,
}

const DEFAULT_SERVICEABLE: &[&str] = &[
    // Gurgaon
    "122001", "122002", "122003", "122004", "122005", "122006", "122007", "122008",
    "122009", "122010", "122011", "122015", "122016", "122017", "122018", "122022",
    "122101", "122102", "122103", "122104", "122105",
    // Noida and Greater Noida
    "201301", "201303", "201304", "201305", "201306", "201307", "201308", "201309",
    "201310", "201312", "201313", "201314", "201318",
];

// Manesar
const DEFAULT_BORDER: &[&str] = &["122413", "122414"];

impl Default for ServiceArea {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICEABLE.iter().copied(), DEFAULT_BORDER.iter().copied())
    }
}

impl ServiceArea {
    pub fn new<'a>(
        serviceable: impl IntoIterator<Item = &'a str>,
        border:      impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            serviceable: serviceable.into_iter().map(str::to_owned).collect(),
            border:      border.into_iter().map(str::to_owned).collect(),
        }
    }

    /// Exact-match classification.  A pincode listed in both sets is
    /// serviceable.
    pub fn classify(&self, pincode: &str) -> Serviceability {
        if self.serviceable.contains(pincode) {
            Serviceability::Serviceable
        } else if self.border.contains(pincode) {
            Serviceability::Border
        } else {
            Serviceability::NotServiceable
        }
    }
}

impl std::fmt::Display for Serviceability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Serviceability::Serviceable    => "serviceable",
            Serviceability::Border         => "border area (confirm with sales)",
            Serviceability::NotServiceable => "not serviceable",
        })
    }
}
