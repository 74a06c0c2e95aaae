//! Integration tests for the import command.

use std::fs;

use soi_cli::cli::ImportArgs;
use soi_cli::commands::run_import;

#[test]
fn test_import_command_writes_request_buffer() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("orders.csv"),
        "customer,end_date\n42,01-31-2024\n",
    )
    .unwrap();
    let out = dir.path().join("request.csv");

    let summary = run_import(&ImportArgs {
        dir: dir.path().to_path_buf(),
        file: "orders.csv".to_string(),
        out: Some(out.clone()),
    })
    .unwrap();

    assert!(summary.report.succeeded());
    assert_eq!(summary.report.rows, 1);

    let buffer = fs::read_to_string(&out).unwrap();
    let mut lines = buffer.lines();
    assert_eq!(lines.next(), Some("id,partner_id,validity_date"));
    let row = lines.next().unwrap();
    assert!(row.starts_with("__export__.sale_order_"));
    assert!(row.ends_with(",42,2024-01-31"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_import_command_missing_file_fails_without_error() {
    let dir = tempfile::tempdir().unwrap();

    let summary = run_import(&ImportArgs {
        dir: dir.path().to_path_buf(),
        file: "missing.csv".to_string(),
        out: None,
    })
    .unwrap();

    assert!(!summary.report.succeeded());
    assert_eq!(summary.report.rows, 0);
    assert!(summary.report.outcome.is_none());
}

#[test]
fn test_import_command_invalid_date_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("orders.csv"),
        "customer,end_date\n42,13-40-2024\n",
    )
    .unwrap();

    let result = run_import(&ImportArgs {
        dir: dir.path().to_path_buf(),
        file: "orders.csv".to_string(),
        out: None,
    });
    assert!(result.is_err());
}
