//! `rb-core` — foundational types for the rentbasket logistics engine.
//!
//! This crate is a dependency of every other `rb-*` crate.  It has no `rb-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`geo`]       | `GeoPoint`, `haversine_km`, `EARTH_RADIUS_KM`     |
//! | [`pincode`]   | `Pincode` string key                              |
//! | [`error`]     | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod pincode;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, haversine_km};
pub use pincode::Pincode;
