//! The bulk import service seam.

use soi_model::ImportOutcome;

use crate::error::Result;
use crate::request::ImportRequest;

/// The host platform's generic record-import facility.
///
/// Deduplication, field coercion, validation, and transactional commit all
/// live behind this trait and are out of scope here. One call imports one
/// request buffer and reports a per-record outcome list; row-level
/// rejections come back as [`soi_model::ImportMessage::Error`] entries, not
/// as an `Err`.
pub trait BulkImportService {
    fn import(&self, request: &ImportRequest) -> Result<ImportOutcome>;
}

impl<T: BulkImportService + ?Sized> BulkImportService for &T {
    fn import(&self, request: &ImportRequest) -> Result<ImportOutcome> {
        (**self).import(request)
    }
}
