//! The `BatchWriter` trait implemented by all backend writers.

use crate::{OutputResult, QuoteRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait BatchWriter {
    /// Called once, before any rows, with the input file's header.
    fn write_header(&mut self, input_columns: &[String]) -> OutputResult<()>;

    /// Write a batch of processed rows.
    fn write_rows(&mut self, rows: &[QuoteRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
