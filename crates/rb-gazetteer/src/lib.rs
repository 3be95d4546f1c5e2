//! `rb-gazetteer` — pincode reference data.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`record`]   | `PincodeRecord`                                            |
//! | [`gazetteer`]| `Gazetteer` (exact-match pincode map)                      |
//! | [`loader`]   | `load_csv`, `load_reader`, `LoadStats`                     |
//! | [`service`]  | `ServiceArea`, `Serviceability`                            |
//! | [`error`]    | `GazetteerError`, `GazetteerResult<T>`                     |
//!
//! # Loading policy
//!
//! A missing reference file yields an empty gazetteer rather than an error,
//! so an engine built on top of it stays constructible and every lookup
//! reports an unknown pincode.  Malformed rows are skipped and logged; the
//! rest of the file still loads.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | Uses `rustc-hash` for the pincode map.                   |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `ServiceArea`.      |

pub mod error;
pub mod gazetteer;
pub mod loader;
pub mod record;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::{GazetteerError, GazetteerResult};
pub use gazetteer::Gazetteer;
pub use loader::{LoadStats, load_csv, load_reader};
pub use record::PincodeRecord;
pub use service::{ServiceArea, Serviceability};
