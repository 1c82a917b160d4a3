//! Calibration Table Loading Tests
//!
//! Exercises the CSV loader against on-disk files: header handling, sparse
//! and non-numeric cells, duplicate columns/rows, and load failures.

use std::path::Path;

use calmerge::error::LoadError;
use calmerge::CalibrationTable;

fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_table_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "calibration.csv",
        ",A-1,A-2,A-3\n\
         full_fill_percent,55,60,52\n\
         empty_fill_percent,5,8,\n\
         brightness_threshold,120.5,118,122\n",
    );

    let table = CalibrationTable::load(&path).unwrap();
    assert_eq!(table.regions(), ["A-1", "A-2", "A-3"]);
    assert_eq!(
        table.value("full_fill_percent", "A-2"),
        Some(&serde_json::Number::from(60))
    );
    assert_eq!(
        table.value("brightness_threshold", "A-1"),
        serde_json::Number::from_f64(120.5).as_ref()
    );
    // Empty trailing cell produces no entry
    assert_eq!(table.value("empty_fill_percent", "A-3"), None);
}

#[test]
fn missing_file_reports_io_error_with_path() {
    let err = CalibrationTable::load("/no/such/dir/calibration.csv").unwrap_err();
    match err {
        LoadError::Io { path, .. } => {
            assert_eq!(path, Path::new("/no/such/dir/calibration.csv"));
        }
        other => panic!("expected Io error, got: {other}"),
    }
}

#[test]
fn empty_file_reports_missing_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "empty.csv", "");
    let err = CalibrationTable::load(&path).unwrap_err();
    assert!(matches!(err, LoadError::MissingHeader { .. }));
    assert!(err.to_string().contains("no header row"));
}

#[test]
fn quoted_region_names_parse() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "quoted.csv",
        "label,\"Zone, North\",A-2\nfull_fill_percent,41,42\n",
    );
    let table = CalibrationTable::load(&path).unwrap();
    assert!(table.has_region("Zone, North"));
    assert_eq!(
        table.value("full_fill_percent", "Zone, North"),
        Some(&serde_json::Number::from(41))
    );
}

#[test]
fn header_only_file_yields_empty_but_valid_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "header_only.csv", ",A-1,A-2\n");
    let table = CalibrationTable::load(&path).unwrap();
    assert_eq!(table.regions(), ["A-1", "A-2"]);
    assert_eq!(table.params().count(), 0);
}

#[test]
fn duplicate_columns_and_rows_resolve_last_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "dups.csv",
        ",A-1,A-1\nfull_fill_percent,10,20\nfull_fill_percent,30,40\n",
    );
    let table = CalibrationTable::load(&path).unwrap();
    assert_eq!(
        table.value("full_fill_percent", "A-1"),
        Some(&serde_json::Number::from(40))
    );
}
