//! CSV output backend.
//!
//! Echoes the input columns and appends `haversine_km`,
//! `estimated_road_km` and `delivery_price`, formatted to two decimals.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::BatchWriter;
use crate::{OutputResult, PairFigures, QuoteRow, UNAVAILABLE};

/// Columns appended after the input columns.
pub const DERIVED_COLUMNS: [&str; 3] = ["haversine_km", "estimated_road_km", "delivery_price"];

/// Writes batch results as CSV.
pub struct CsvWriter<W: Write = File> {
    out:      Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the output file at `path`.
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        Ok(Self { out: Writer::from_path(path)?, finished: false })
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn from_writer(inner: W) -> Self {
        Self { out: Writer::from_writer(inner), finished: false }
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> OutputResult<W> {
        self.out.into_inner().map_err(|e| e.into_error().into())
    }
}

fn derived_fields(figures: Option<PairFigures>) -> [String; 3] {
    match figures {
        Some(f) => [
            format!("{:.2}", f.haversine_km),
            format!("{:.2}", f.road_km),
            format!("{:.2}", f.delivery_price),
        ],
        None => [UNAVAILABLE.to_owned(), UNAVAILABLE.to_owned(), UNAVAILABLE.to_owned()],
    }
}

impl<W: Write> BatchWriter for CsvWriter<W> {
    fn write_header(&mut self, input_columns: &[String]) -> OutputResult<()> {
        self.out.write_record(
            input_columns.iter().map(String::as_str).chain(DERIVED_COLUMNS),
        )?;
        Ok(())
    }

    fn write_rows(&mut self, rows: &[QuoteRow]) -> OutputResult<()> {
        for row in rows {
            let derived = derived_fields(row.figures);
            self.out.write_record(
                row.pair.fields.iter().map(String::as_str).chain(derived.iter().map(String::as_str)),
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
