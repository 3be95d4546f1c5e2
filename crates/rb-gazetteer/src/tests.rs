//! Unit tests for rb-gazetteer.

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use crate::{GazetteerError, load_csv, load_reader};

    const NCR_CSV: &str = "\
pincode,lat,lng,city,state\n\
122003,28.4325,77.0730,Gurgaon,Haryana\n\
122018,28.4089,77.0418,Gurgaon,Haryana\n\
201301,28.5700,77.3200,Noida,Uttar Pradesh\n\
";

    #[test]
    fn loads_all_rows() {
        let (g, stats) = load_reader(Cursor::new(NCR_CSV)).unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(stats.loaded, 3);
        assert_eq!(stats.skipped, 0);

        let noida = g.get("201301").unwrap();
        assert_eq!(noida.city, "Noida");
        assert_eq!(noida.state, "Uttar Pradesh");
        assert_eq!(noida.location.lat, 28.57);
        assert_eq!(noida.location.lon, 77.32);
    }

    #[test]
    fn exact_match_only() {
        let (g, _) = load_reader(Cursor::new(NCR_CSV)).unwrap();
        assert!(g.get("12200").is_none());
        assert!(g.get("122003 ").is_none());
        assert!(g.get("0122003").is_none());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let csv = "\
pincode,lat,lng,city,state\n\
122003,28.4325,77.0730,Gurgaon,Haryana\n\
122018,not-a-number,77.0418,Gurgaon,Haryana\n\
122019,95.0,77.0418,Gurgaon,Haryana\n\
,28.4,77.0,Gurgaon,Haryana\n\
201301,28.5700,77.3200,Noida,Uttar Pradesh\n\
";
        let (g, stats) = load_reader(Cursor::new(csv)).unwrap();
        assert_eq!(g.len(), 2);
        assert_eq!(stats.loaded, 2);
        assert_eq!(stats.skipped, 3);
        assert!(g.contains("122003"));
        assert!(g.contains("201301"));
        assert!(!g.contains("122018"));
    }

    #[test]
    fn padded_coordinates_are_accepted() {
        let csv = "pincode,lat,lng,city,state\n122003, 28.4325 , 77.0730,Gurgaon,Haryana\n";
        let (g, stats) = load_reader(Cursor::new(csv)).unwrap();
        assert_eq!(stats.loaded, 1);
        assert_eq!(stats.skipped, 0);
        let gurgaon = g.get("122003").unwrap();
        assert_eq!(gurgaon.location.lat, 28.4325);
        assert_eq!(gurgaon.location.lon, 77.0730);
    }

    #[test]
    fn padded_pincode_is_kept_verbatim() {
        let csv = "pincode,lat,lng,city,state\n 122003,28.4325,77.0730,Gurgaon,Haryana\n";
        let (g, _) = load_reader(Cursor::new(csv)).unwrap();
        assert!(g.contains(" 122003"));
        assert!(!g.contains("122003"));
    }

    #[test]
    fn extra_columns_ignored() {
        let csv = "district,pincode,lat,lng,city,state\nSouth,122003,28.4,77.0,Gurgaon,Haryana\n";
        let (g, _) = load_reader(Cursor::new(csv)).unwrap();
        assert!(g.contains("122003"));
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "pincode,lat,lng,city\n122003,28.4,77.0,Gurgaon\n";
        let err = load_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, GazetteerError::MissingColumn("state")));
    }

    #[test]
    fn duplicate_pincode_last_wins() {
        let csv = "\
pincode,lat,lng,city,state\n\
122003,28.0,77.0,Old,Haryana\n\
122003,28.4325,77.0730,Gurgaon,Haryana\n\
";
        let (g, stats) = load_reader(Cursor::new(csv)).unwrap();
        assert_eq!(g.len(), 1);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(g.get("122003").unwrap().city, "Gurgaon");
    }

    #[test]
    fn missing_file_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let (g, stats) = load_csv(&dir.path().join("absent.csv")).unwrap();
        assert!(g.is_empty());
        assert_eq!(stats.loaded, 0);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(NCR_CSV.as_bytes()).unwrap();
        file.flush().unwrap();

        let (g, _) = load_csv(file.path()).unwrap();
        assert_eq!(g.len(), 3);
    }
}

#[cfg(test)]
mod gazetteer {
    use rb_core::{GeoPoint, Pincode};

    use crate::{Gazetteer, PincodeRecord};

    fn record(code: &str, city: &str, state: &str) -> PincodeRecord {
        PincodeRecord::new(Pincode::new(code).unwrap(), GeoPoint::new(28.5, 77.1), city, state)
    }

    #[test]
    fn empty_misses_everything() {
        let g = Gazetteer::empty();
        assert!(g.is_empty());
        assert!(g.get("122003").is_none());
    }

    #[test]
    fn from_records() {
        let g = Gazetteer::from_records([
            record("122003", "Gurgaon", "Haryana"),
            record("201301", "Noida", "Uttar Pradesh"),
        ]);
        assert_eq!(g.len(), 2);
        assert_eq!(g.iter().count(), 2);
    }

    #[test]
    fn city_and_state_comparison_is_case_sensitive() {
        let a = record("1", "Gurgaon", "Haryana");
        let b = record("2", "gurgaon", "Haryana");
        assert!(!a.same_city(&b));
        assert!(a.same_state(&b));
    }
}

#[cfg(test)]
mod service {
    use crate::{ServiceArea, Serviceability};

    #[test]
    fn default_area() {
        let area = ServiceArea::default();
        assert_eq!(area.classify("122003"), Serviceability::Serviceable);
        assert_eq!(area.classify("201301"), Serviceability::Serviceable);
        assert_eq!(area.classify("122413"), Serviceability::Border);
        assert_eq!(area.classify("110001"), Serviceability::NotServiceable);
    }

    #[test]
    fn serviceable_wins_over_border() {
        let area = ServiceArea::new(["1"], ["1", "2"]);
        assert_eq!(area.classify("1"), Serviceability::Serviceable);
        assert_eq!(area.classify("2"), Serviceability::Border);
    }
}
