//! `rb-output` — batch quoting and result persistence.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend  | Output                                               |
//! |-----------|----------|------------------------------------------------------|
//! | *(none)*  | CSV      | input columns + `haversine_km`, `estimated_road_km`, `delivery_price` |
//! | `sqlite`  | SQLite   | `quotes` table                                       |
//!
//! Both implement [`BatchWriter`] and are driven by [`process_batch`].
//! Rows whose pincodes are unknown are written with [`UNAVAILABLE`] (CSV)
//! or `NULL` (SQLite) in every derived column; the batch never aborts on
//! them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rb_output::{CsvWriter, default_output_path, process_batch};
//!
//! let mut writer = CsvWriter::from_path(&default_output_path(input))?;
//! let summary = process_batch(File::open(input)?, &engine, &policy, &mut writer)?;
//! ```
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `sqlite`   | Enables [`SqliteWriter`].                               |
//! | `parallel` | Estimates rows with Rayon.                              |

pub mod batch;
pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use batch::{
    BatchSummary, default_output_path, estimate_rows, process_batch, read_pairs, write_batch,
};
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{PairFigures, PairRow, QuoteRow, UNAVAILABLE};
pub use writer::BatchWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
