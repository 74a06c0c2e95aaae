//! In-memory import request construction.
//!
//! The bulk import service takes one CSV buffer (header + transformed
//! rows) plus the per-call settings the host platform expects. The buffer
//! is built exactly once per run and discarded after the call returns.

use csv::{QuoteStyle, WriterBuilder};
use serde::{Deserialize, Serialize};

use soi_model::{HOST_DATE_FORMAT, ImportMapping, TargetRow};

use crate::error::{ImportError, Result};

/// MIME type declared on every request.
pub const CSV_FILE_TYPE: &str = "text/csv";

/// Per-call settings handed to the bulk import service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    pub quoting: char,
    pub separator: char,
    pub date_format: String,
    pub has_headers: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            quoting: '"',
            separator: ',',
            date_format: HOST_DATE_FORMAT.to_string(),
            has_headers: true,
        }
    }
}

/// One fully built import request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// Host schema the records are imported into.
    pub res_model: String,
    pub file_type: String,
    /// Target field names in header order, id field first.
    pub fields: Vec<String>,
    /// The serialized CSV buffer.
    pub file: String,
    pub options: ImportOptions,
}

impl ImportOptions {
    /// Separator and quote character as single bytes.
    ///
    /// Both must be ASCII; the fields are deserializable, so a config with
    /// wider characters is rejected instead of being truncated.
    fn csv_bytes(&self) -> Result<(u8, u8)> {
        if !self.separator.is_ascii() || !self.quoting.is_ascii() {
            return Err(ImportError::Buffer {
                message: format!(
                    "separator {:?} and quote {:?} must be ASCII",
                    self.separator, self.quoting
                ),
            });
        }
        Ok((self.separator as u8, self.quoting as u8))
    }
}

impl ImportRequest {
    /// Serialize the transformed rows into a request buffer.
    ///
    /// The buffer uses the `"` quote character with quoting suppressed,
    /// matching what the host platform's importer is configured for.
    pub fn build(mapping: &ImportMapping, rows: &[TargetRow]) -> Result<Self> {
        Self::build_with_options(mapping, rows, ImportOptions::default())
    }

    /// Build a request with explicit settings.
    pub fn build_with_options(
        mapping: &ImportMapping,
        rows: &[TargetRow],
        options: ImportOptions,
    ) -> Result<Self> {
        let fields = mapping.target_fields();
        let (separator, quoting) = options.csv_bytes()?;
        let mut writer = WriterBuilder::new()
            .delimiter(separator)
            .quote(quoting)
            .quote_style(QuoteStyle::Never)
            .from_writer(Vec::new());
        for field in &fields {
            reject_unquotable(field, &options)?;
        }
        writer.write_record(&fields).map_err(buffer_error)?;
        for row in rows {
            let cells = row.render(&fields);
            for cell in &cells {
                reject_unquotable(cell, &options)?;
            }
            writer.write_record(cells).map_err(buffer_error)?;
        }
        let bytes = writer.into_inner().map_err(|e| ImportError::Buffer {
            message: e.to_string(),
        })?;
        let file = String::from_utf8(bytes).map_err(|e| ImportError::Buffer {
            message: e.to_string(),
        })?;
        Ok(Self {
            res_model: mapping.schema.clone(),
            file_type: CSV_FILE_TYPE.to_string(),
            fields,
            file,
            options,
        })
    }

    /// Number of lines in the buffer, header included.
    pub fn line_count(&self) -> usize {
        self.file.lines().count()
    }
}

fn buffer_error(e: csv::Error) -> ImportError {
    ImportError::Buffer {
        message: e.to_string(),
    }
}

/// With quoting suppressed nothing can escape these characters, so a value
/// containing one would silently shift the row's columns. Such a value is
/// rejected before anything is submitted.
fn reject_unquotable(cell: &str, options: &ImportOptions) -> Result<()> {
    if cell.contains([options.separator, options.quoting, '\r', '\n']) {
        return Err(ImportError::Buffer {
            message: format!("value {cell:?} cannot be written with quoting suppressed"),
        });
    }
    Ok(())
}
