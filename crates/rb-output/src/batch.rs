//! Batch pair processing.
//!
//! # Input format
//!
//! Any CSV with `origin` and `dest` columns; other columns are carried
//! through to the output unchanged.
//!
//! ```csv
//! order_id,origin,dest
//! A-17,122003,201301
//! A-18,122003,000000
//! ```
//!
//! Short rows are tolerated (missing fields read as empty and the pair is
//! reported unavailable).  Fields that are not valid UTF-8 are decoded
//! lossily; such a pincode can never match the gazetteer, so its row is
//! reported unavailable too.

use std::io::Read;
use std::path::{Path, PathBuf};

use rb_distance::RoadEstimator;
use rb_pricing::PricingPolicy;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::writer::BatchWriter;
use crate::{OutputError, OutputResult, PairFigures, PairRow, QuoteRow};

/// Counts for one processed batch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total:       usize,
    pub priced:      usize,
    pub unavailable: usize,
}

/// Read the header and every pair from a batch CSV.
pub fn read_pairs<R: Read>(reader: R) -> OutputResult<(Vec<String>, Vec<PairRow>)> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = csv_reader.byte_headers()?.iter().map(decode_field).collect();
    let column = |name: &'static str| {
        headers.iter().position(|h| h == name).ok_or(OutputError::MissingColumn(name))
    };
    let origin_idx = column("origin")?;
    let dest_idx = column("dest")?;

    let mut pairs = Vec::new();
    for result in csv_reader.byte_records() {
        let record = result?;
        let mut fields: Vec<String> = record.iter().map(decode_field).collect();
        fields.resize(headers.len(), String::new());
        pairs.push(PairRow {
            origin: fields[origin_idx].clone(),
            dest:   fields[dest_idx].clone(),
            fields,
        });
    }
    Ok((headers, pairs))
}

/// Estimate and price every pair.  Output order matches input order.
pub fn estimate_rows<E>(estimator: &E, policy: &PricingPolicy, pairs: Vec<PairRow>) -> Vec<QuoteRow>
where
    E: RoadEstimator + Sync + ?Sized,
{
    #[cfg(feature = "parallel")]
    let rows = pairs.into_par_iter().map(|pair| price_pair(estimator, policy, pair)).collect();

    #[cfg(not(feature = "parallel"))]
    let rows = pairs.into_iter().map(|pair| price_pair(estimator, policy, pair)).collect();

    rows
}

/// Write already-priced rows to `writer` and summarise them.
pub fn write_batch<W>(
    headers: &[String],
    rows:    &[QuoteRow],
    writer:  &mut W,
) -> OutputResult<BatchSummary>
where
    W: BatchWriter + ?Sized,
{
    writer.write_header(headers)?;
    writer.write_rows(rows)?;
    writer.finish()?;

    let priced = rows.iter().filter(|r| r.figures.is_some()).count();
    Ok(BatchSummary {
        total:       rows.len(),
        priced,
        unavailable: rows.len() - priced,
    })
}

/// Read pairs from `reader`, price them, and write every row to `writer`.
///
/// Unknown pincodes mark their row unavailable; only I/O and CSV structure
/// errors abort the batch, and they do so before `writer` is touched.
pub fn process_batch<R, E, W>(
    reader:    R,
    estimator: &E,
    policy:    &PricingPolicy,
    writer:    &mut W,
) -> OutputResult<BatchSummary>
where
    R: Read,
    E: RoadEstimator + Sync + ?Sized,
    W: BatchWriter + ?Sized,
{
    let (headers, pairs) = read_pairs(reader)?;
    let rows = estimate_rows(estimator, policy, pairs);
    let summary = write_batch(&headers, &rows, writer)?;
    log::info!(
        "Batch complete: {} rows, {} priced, {} unavailable",
        summary.total,
        summary.priced,
        summary.unavailable
    );
    Ok(summary)
}

/// `orders.csv` → `orders_estimated.csv`, in the same directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    input.with_file_name(format!("{stem}_estimated.csv"))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn decode_field(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn price_pair<E>(estimator: &E, policy: &PricingPolicy, pair: PairRow) -> QuoteRow
where
    E: RoadEstimator + ?Sized,
{
    let figures = estimator
        .estimate(&pair.origin, &pair.dest)
        .map_err(rb_pricing::PricingError::from)
        .and_then(|e| {
            let delivery_price = policy.price(e.road_km)?;
            Ok(PairFigures { haversine_km: e.haversine_km, road_km: e.road_km, delivery_price })
        });

    match figures {
        Ok(f) => QuoteRow { pair, figures: Some(f) },
        Err(e) => {
            log::debug!("{} -> {} unavailable: {e}", pair.origin, pair.dest);
            QuoteRow { pair, figures: None }
        }
    }
}
