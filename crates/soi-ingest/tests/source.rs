//! File-based tests for the source reader.

use std::fs;
use std::path::Path;

use soi_ingest::{IngestError, open_source};

fn write_export(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write export file");
}

#[test]
fn test_reads_rows_lazily() {
    let dir = tempfile::tempdir().unwrap();
    write_export(
        dir.path(),
        "orders.csv",
        "customer,end_date\n42,01-31-2024\n7,02-15-2024\n",
    );

    let reader = open_source(dir.path(), "orders.csv").unwrap();
    assert_eq!(reader.headers(), ["customer", "end_date"]);
    reader.require_columns(["customer", "end_date"]).unwrap();

    let rows: Vec<_> = reader.rows().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("customer"), Some("42"));
    assert_eq!(rows[0].get("end_date"), Some("01-31-2024"));
    assert_eq!(rows[1].get("customer"), Some("7"));
}

#[test]
fn test_missing_file_is_file_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = open_source(dir.path(), "missing.csv").unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
    assert!(err.is_file_access());
}

#[test]
fn test_missing_column_reported_by_name() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path(), "orders.csv", "customer,start_date\n42,01-31-2024\n");

    let reader = open_source(dir.path(), "orders.csv").unwrap();
    let err = reader.require_columns(["customer", "end_date"]).unwrap_err();
    assert!(matches!(
        err,
        IngestError::MissingColumn { column, .. } if column == "end_date"
    ));
}

#[test]
fn test_bom_and_padding_stripped() {
    let dir = tempfile::tempdir().unwrap();
    write_export(
        dir.path(),
        "orders.csv",
        "\u{feff}customer, end_date \n 42 ,01-31-2024\n",
    );

    let reader = open_source(dir.path(), "orders.csv").unwrap();
    assert_eq!(reader.headers(), ["customer", "end_date"]);
    let rows: Vec<_> = reader.rows().map(Result::unwrap).collect();
    assert_eq!(rows[0].get("customer"), Some("42"));
}

#[test]
fn test_header_only_file_yields_no_rows() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path(), "orders.csv", "customer,end_date\n");

    let reader = open_source(dir.path(), "orders.csv").unwrap();
    assert_eq!(reader.rows().count(), 0);
}
