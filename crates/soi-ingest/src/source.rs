//! Lazy CSV source reading.
//!
//! The external system drops its export into a directory; each run opens
//! one file, checks the header, and streams rows one record at a time. The
//! file handle lives inside the reader and is released when the reader is
//! dropped, on every exit path.

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// One source line, keyed by normalized column name.
#[derive(Debug, Clone)]
pub struct SourceRow {
    values: BTreeMap<String, String>,
}

impl SourceRow {
    /// Build a row directly from column/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Open the export file at `dir/file_name` and read its header row.
pub fn open_source(dir: &Path, file_name: &str) -> Result<SourceReader> {
    let path = dir.join(file_name);
    let file = File::open(&path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            IngestError::FileNotFound { path: path.clone() }
        } else {
            IngestError::FileRead {
                path: path.clone(),
                source: e,
            }
        }
    })?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let headers = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.clone(),
            message: e.to_string(),
        })?
        .iter()
        .map(normalize_header)
        .collect::<Vec<_>>();
    debug!(path = %path.display(), columns = headers.len(), "opened source file");
    Ok(SourceReader {
        path,
        headers,
        reader,
    })
}

/// A header-checked CSV source positioned at the first data row.
#[derive(Debug)]
pub struct SourceReader {
    path: PathBuf,
    headers: Vec<String>,
    reader: csv::Reader<File>,
}

impl SourceReader {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Verify the header row contains every listed column.
    pub fn require_columns<'a>(&self, columns: impl IntoIterator<Item = &'a str>) -> Result<()> {
        for column in columns {
            if !self.headers.iter().any(|h| h == column) {
                return Err(IngestError::MissingColumn {
                    column: column.to_string(),
                    path: self.path.clone(),
                });
            }
        }
        Ok(())
    }

    /// Consume the reader, yielding rows lazily.
    pub fn rows(self) -> Rows {
        Rows {
            path: self.path,
            headers: self.headers,
            records: self.reader.into_records(),
        }
    }
}

/// Lazy row iterator; owns the underlying file handle.
pub struct Rows {
    path: PathBuf,
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<File>,
}

impl Rows {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for Rows {
    type Item = Result<SourceRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => {
                return Some(Err(IngestError::CsvParse {
                    path: self.path.clone(),
                    message: e.to_string(),
                }));
            }
        };
        let values = self
            .headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.clone(), normalize_cell(cell)))
            .collect();
        Some(Ok(SourceRow { values }))
    }
}
