//! Unit tests for rb-output.

#[cfg(test)]
mod fixtures {
    use rb_core::{GeoPoint, Pincode};
    use rb_distance::DistanceEngine;
    use rb_gazetteer::{Gazetteer, PincodeRecord};

    pub fn engine() -> DistanceEngine {
        let rec = |code: &str, lat, lon, city: &str, state: &str| {
            PincodeRecord::new(Pincode::new(code).unwrap(), GeoPoint::new(lat, lon), city, state)
        };
        DistanceEngine::with_default_factors(Gazetteer::from_records([
            rec("122003", 28.4325, 77.0730, "Gurgaon", "Haryana"),
            rec("122018", 28.4089, 77.0418, "Gurgaon", "Haryana"),
            rec("201301", 28.5700, 77.3200, "Noida", "Uttar Pradesh"),
        ]))
    }

    pub const BATCH_CSV: &str = "\
order_id,origin,dest\n\
A-17,122003,201301\n\
A-18,122003,000000\n\
A-19,122003,122018\n\
";
}

#[cfg(test)]
mod batch_tests {
    use std::io::Cursor;
    use std::path::Path;

    use rb_pricing::PricingPolicy;

    use super::fixtures::*;
    use crate::{
        BatchSummary, CsvWriter, OutputError, default_output_path, estimate_rows, process_batch,
        read_pairs, write_batch,
    };

    #[test]
    fn read_pairs_keeps_all_columns() {
        let (headers, pairs) = read_pairs(Cursor::new(BATCH_CSV)).unwrap();
        assert_eq!(headers, ["order_id", "origin", "dest"]);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].origin, "122003");
        assert_eq!(pairs[0].dest, "201301");
        assert_eq!(pairs[0].fields, ["A-17", "122003", "201301"]);
    }

    #[test]
    fn short_rows_are_padded() {
        let (_, pairs) = read_pairs(Cursor::new("origin,dest,note\n122003\n")).unwrap();
        assert_eq!(pairs[0].origin, "122003");
        assert_eq!(pairs[0].dest, "");
        assert_eq!(pairs[0].fields.len(), 3);
    }

    #[test]
    fn missing_dest_column() {
        let err = read_pairs(Cursor::new("origin,destination\n1,2\n")).unwrap_err();
        assert!(matches!(err, OutputError::MissingColumn("dest")));
    }

    #[test]
    fn unknown_rows_are_unavailable_not_zero() {
        let (_, pairs) = read_pairs(Cursor::new(BATCH_CSV)).unwrap();
        let rows = estimate_rows(&engine(), &PricingPolicy::default(), pairs);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].figures.is_some());
        assert!(rows[1].figures.is_none());
        assert_eq!(rows[2].figures.unwrap().delivery_price, 525.0);
    }

    #[test]
    fn csv_output_appends_derived_columns() {
        let mut writer = CsvWriter::from_writer(Vec::new());
        let summary = process_batch(
            Cursor::new(BATCH_CSV),
            &engine(),
            &PricingPolicy::default(),
            &mut writer,
        )
        .unwrap();
        assert_eq!(summary, BatchSummary { total: 3, priced: 2, unavailable: 1 });

        let bytes = writer.into_inner().unwrap();
        let mut rdr = csv::Reader::from_reader(bytes.as_slice());
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["order_id", "origin", "dest", "haversine_km", "estimated_road_km", "delivery_price"]
        );

        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "A-17");
        assert_eq!(&rows[0][3], "28.57");
        assert_eq!(&rows[0][4], "34.57");
        assert_eq!(&rows[0][5], "818.57");
        assert_eq!(&rows[1][3], "N/A");
        assert_eq!(&rows[1][4], "N/A");
        assert_eq!(&rows[1][5], "N/A");
        assert_eq!(&rows[2][5], "525.00");
    }

    #[test]
    fn csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("orders_estimated.csv");
        let mut writer = CsvWriter::from_path(&out).unwrap();
        process_batch(Cursor::new(BATCH_CSV), &engine(), &PricingPolicy::default(), &mut writer)
            .unwrap();

        let mut rdr = csv::Reader::from_path(&out).unwrap();
        assert_eq!(rdr.records().count(), 3);
    }

    #[test]
    fn invalid_utf8_row_is_unavailable() {
        let input: &[u8] = b"origin,dest\n122003,201301\n12200\xff,201301\n122003,122018\n";
        let mut writer = CsvWriter::from_writer(Vec::new());
        let summary =
            process_batch(input, &engine(), &PricingPolicy::default(), &mut writer).unwrap();
        assert_eq!(summary, BatchSummary { total: 3, priced: 2, unavailable: 1 });

        let bytes = writer.into_inner().unwrap();
        let mut rdr = csv::Reader::from_reader(bytes.as_slice());
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][4], "818.57");
        assert_eq!(&rows[1][0], "12200\u{fffd}");
        assert_eq!(&rows[1][4], "N/A");
        assert_eq!(&rows[2][4], "525.00");
    }

    #[test]
    fn structural_error_leaves_writer_untouched() {
        let mut writer = CsvWriter::from_writer(Vec::new());
        let err = process_batch(
            Cursor::new("origin,destination\n122003,201301\n"),
            &engine(),
            &PricingPolicy::default(),
            &mut writer,
        )
        .unwrap_err();
        assert!(matches!(err, OutputError::MissingColumn("dest")));
        assert!(writer.into_inner().unwrap().is_empty());
    }

    #[test]
    fn write_batch_counts_rows() {
        let (headers, pairs) = read_pairs(Cursor::new(BATCH_CSV)).unwrap();
        let rows = estimate_rows(&engine(), &PricingPolicy::default(), pairs);
        let mut writer = CsvWriter::from_writer(Vec::new());
        let summary = write_batch(&headers, &rows, &mut writer).unwrap();
        assert_eq!(summary, BatchSummary { total: 3, priced: 2, unavailable: 1 });
    }

    #[test]
    fn empty_batch() {
        let mut writer = CsvWriter::from_writer(Vec::new());
        let summary = process_batch(
            Cursor::new("origin,dest\n"),
            &engine(),
            &PricingPolicy::default(),
            &mut writer,
        )
        .unwrap();
        assert_eq!(summary, BatchSummary::default());
    }

    #[test]
    fn finish_idempotent() {
        use crate::BatchWriter;

        let mut writer = CsvWriter::from_writer(Vec::new());
        writer.finish().unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn output_path() {
        assert_eq!(
            default_output_path(Path::new("data/orders.csv")),
            Path::new("data/orders_estimated.csv")
        );
        assert_eq!(default_output_path(Path::new("pairs")), Path::new("pairs_estimated.csv"));
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use std::io::Cursor;

    use rb_pricing::PricingPolicy;

    use super::fixtures::*;
    use crate::sqlite::SqliteWriter;
    use crate::process_batch;

    #[test]
    fn rows_and_nulls() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db = dir.path().join("quotes.db");
        let mut w = SqliteWriter::new(&db).unwrap();
        process_batch(Cursor::new(BATCH_CSV), &engine(), &PricingPolicy::default(), &mut w)
            .unwrap();

        let conn = rusqlite::Connection::open(&db).unwrap();
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM quotes", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 3);

        let price: Option<f64> = conn
            .query_row("SELECT delivery_price FROM quotes WHERE dest = '000000'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(price, None);

        let price: Option<f64> = conn
            .query_row("SELECT delivery_price FROM quotes WHERE dest = '122018'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(price, Some(525.0));
    }
}
