//! End-to-end tests for the import pipeline with a recording service.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use soi_import::{BulkImportService, ImportRequest, SaleOrderImporter};
use soi_model::{ImportMapping, ImportMessage, ImportOutcome};
use soi_transform::ScriptedLetters;

/// Captures every submitted request and replays a canned outcome.
#[derive(Default)]
struct RecordingService {
    requests: RefCell<Vec<ImportRequest>>,
    response: Vec<ImportMessage>,
}

impl RecordingService {
    fn with_response(response: Vec<ImportMessage>) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            response,
        }
    }

    fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl BulkImportService for RecordingService {
    fn import(&self, request: &ImportRequest) -> soi_import::Result<ImportOutcome> {
        self.requests.borrow_mut().push(request.clone());
        Ok(ImportOutcome::new(self.response.clone()))
    }
}

fn write_export(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write export file");
}

fn importer(service: &RecordingService) -> SaleOrderImporter<&RecordingService> {
    SaleOrderImporter::new(ImportMapping::sale_order(), service)
        .with_letters(Box::new(ScriptedLetters::new("abcdefghijklmnopqrstuvwxyz")))
}

#[test]
fn test_three_rows_submit_four_line_buffer_once() {
    let dir = tempfile::tempdir().unwrap();
    write_export(
        dir.path(),
        "orders.csv",
        "customer,end_date\n1,01-31-2024\n2,02-15-2024\n3,12-01-2023\n",
    );
    let service = RecordingService::default();

    let report = importer(&service).run(dir.path(), "orders.csv").unwrap();

    assert!(report.succeeded());
    assert_eq!(report.rows, 3);
    assert_eq!(service.request_count(), 1);

    let requests = service.requests.borrow();
    let request = &requests[0];
    assert_eq!(request.line_count(), 4);
    assert_eq!(request.res_model, "sale.order");
    assert_eq!(request.file_type, "text/csv");
    assert_eq!(request.fields, ["id", "partner_id", "validity_date"]);

    let mut lines = request.file.lines();
    assert_eq!(lines.next(), Some("id,partner_id,validity_date"));
    assert_eq!(
        lines.next(),
        Some("__export__.sale_order_ab_cdefghij,1,2024-01-31")
    );
    assert_eq!(
        lines.next(),
        Some("__export__.sale_order_kl_mnopqrst,2,2024-02-15")
    );
    assert_eq!(
        lines.next(),
        Some("__export__.sale_order_uv_wxyzabcd,3,2023-12-01")
    );
}

#[test]
fn test_missing_file_returns_false_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let service = RecordingService::default();

    let mut importer = importer(&service);
    let ok = importer.import_file(dir.path(), "missing.csv").unwrap();

    assert!(!ok);
    assert_eq!(service.request_count(), 0);
}

#[test]
fn test_invalid_date_fails_fast_and_submits_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_export(
        dir.path(),
        "orders.csv",
        "customer,end_date\n1,01-31-2024\n2,13-40-2024\n",
    );
    let service = RecordingService::default();

    let err = importer(&service).run(dir.path(), "orders.csv").unwrap_err();

    assert!(err.to_string().contains("13-40-2024"));
    assert_eq!(service.request_count(), 0);
}

#[test]
fn test_missing_source_column_fails_before_transforming() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path(), "orders.csv", "customer,start_date\n1,01-31-2024\n");
    let service = RecordingService::default();

    let err = importer(&service).run(dir.path(), "orders.csv").unwrap_err();

    assert!(err.to_string().contains("end_date"));
    assert_eq!(service.request_count(), 0);
}

#[test]
fn test_value_containing_separator_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    write_export(
        dir.path(),
        "orders.csv",
        "customer,end_date\n\"Acme, Inc\",01-31-2024\n",
    );
    let service = RecordingService::default();

    let err = importer(&service).run(dir.path(), "orders.csv").unwrap_err();

    assert!(err.to_string().contains("Acme"));
    assert_eq!(service.request_count(), 0);
}

#[test]
fn test_service_errors_reduce_to_false() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path(), "orders.csv", "customer,end_date\n1,01-31-2024\n");
    let service = RecordingService::with_response(vec![ImportMessage::Error {
        row: Some(1),
        field: Some("partner_id".to_string()),
        message: "no matching customer".to_string(),
    }]);

    let mut importer = importer(&service);
    let ok = importer.import_file(dir.path(), "orders.csv").unwrap();

    assert!(!ok);
    assert_eq!(service.request_count(), 1);
}

#[test]
fn test_empty_export_submits_header_only_buffer() {
    let dir = tempfile::tempdir().unwrap();
    write_export(dir.path(), "orders.csv", "customer,end_date\n");
    let service = RecordingService::default();

    let report = importer(&service).run(dir.path(), "orders.csv").unwrap();

    assert!(report.succeeded());
    assert_eq!(report.rows, 0);
    let requests = service.requests.borrow();
    assert_eq!(requests[0].file, "id,partner_id,validity_date\n");
}
