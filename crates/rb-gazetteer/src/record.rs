//! One row of pincode reference data.

use rb_core::{GeoPoint, Pincode};

/// Location and administrative metadata for one pincode.
///
/// `city` and `state` are free text used only for exact, case-sensitive
/// equality checks by the distance model.
#[derive(Clone, Debug, PartialEq)]
pub struct PincodeRecord {
    pub pincode:  Pincode,
    pub location: GeoPoint,
    pub city:     String,
    pub state:    String,
}

impl PincodeRecord {
    pub fn new(
        pincode:  Pincode,
        location: GeoPoint,
        city:     impl Into<String>,
        state:    impl Into<String>,
    ) -> Self {
        Self { pincode, location, city: city.into(), state: state.into() }
    }

    #[inline]
    pub fn same_city(&self, other: &PincodeRecord) -> bool {
        self.city == other.city
    }

    #[inline]
    pub fn same_state(&self, other: &PincodeRecord) -> bool {
        self.state == other.state
    }
}
