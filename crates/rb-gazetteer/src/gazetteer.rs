//! Exact-match pincode → record map.

use rb_core::Pincode;

use crate::PincodeRecord;

#[cfg(feature = "fx-hash")]
type RecordMap = rustc_hash::FxHashMap<Pincode, PincodeRecord>;
#[cfg(not(feature = "fx-hash"))]
type RecordMap = std::collections::HashMap<Pincode, PincodeRecord>;

/// Immutable pincode reference table.
///
/// Built once (from a CSV via [`crate::load_csv`] or from records directly)
/// and never mutated afterwards.  Lookups are exact string matches only.
#[derive(Clone, Debug, Default)]
pub struct Gazetteer {
    records: RecordMap,
}

impl Gazetteer {
    /// A gazetteer with no entries; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from records.  On duplicate pincodes the last record wins.
    pub fn from_records<I: IntoIterator<Item = PincodeRecord>>(records: I) -> Self {
        let mut gazetteer = Self::empty();
        for record in records {
            gazetteer.insert(record);
        }
        gazetteer
    }

    /// Returns the displaced record, if any.
    pub(crate) fn insert(&mut self, record: PincodeRecord) -> Option<PincodeRecord> {
        self.records.insert(record.pincode.clone(), record)
    }

    #[inline]
    pub fn get(&self, pincode: &str) -> Option<&PincodeRecord> {
        self.records.get(pincode)
    }

    #[inline]
    pub fn contains(&self, pincode: &str) -> bool {
        self.records.contains_key(pincode)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &PincodeRecord> {
        self.records.values()
    }
}
