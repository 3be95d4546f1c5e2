//! SQLite output backend (feature `sqlite`).
//!
//! Appends rows to a `quotes` table.  Unavailable pairs store `NULL` in the
//! three derived columns.  Input columns other than `origin`/`dest` are not
//! kept.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::BatchWriter;
use crate::{OutputResult, QuoteRow};

/// Writes batch results to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS quotes (
                 origin            TEXT NOT NULL,
                 dest              TEXT NOT NULL,
                 haversine_km      REAL,
                 estimated_road_km REAL,
                 delivery_price    REAL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl BatchWriter for SqliteWriter {
    fn write_header(&mut self, _input_columns: &[String]) -> OutputResult<()> {
        Ok(())
    }

    fn write_rows(&mut self, rows: &[QuoteRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO quotes \
                 (origin, dest, haversine_km, estimated_road_km, delivery_price) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.pair.origin,
                    row.pair.dest,
                    row.figures.map(|f| f.haversine_km),
                    row.figures.map(|f| f.road_km),
                    row.figures.map(|f| f.delivery_price),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
