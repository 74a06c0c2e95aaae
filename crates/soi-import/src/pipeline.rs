//! The end-to-end sale order import pipeline.
//!
//! One run is a single synchronous pass: open the export, verify its
//! columns, transform every row, build the request buffer once, submit it,
//! and reduce the service's outcome list to a boolean. There are no
//! retries and no partial submissions; the source file handle is scoped to
//! the run and released on every exit path.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use soi_ingest::open_source;
use soi_model::{ImportMapping, ImportMessage, ImportOutcome};
use soi_transform::{LetterSource, RandomLetters, RowTransformer};

use crate::error::Result;
use crate::request::ImportRequest;
use crate::service::BulkImportService;

/// Result of one pipeline run.
#[derive(Debug)]
pub struct RunReport {
    pub file: PathBuf,
    /// Source rows read and transformed.
    pub rows: usize,
    /// What the service reported; `None` when the file could not be opened
    /// and nothing was submitted.
    pub outcome: Option<ImportOutcome>,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        matches!(&self.outcome, Some(outcome) if !outcome.has_errors())
    }
}

/// Imports one CSV export into the host's sale order schema.
pub struct SaleOrderImporter<S> {
    transformer: RowTransformer,
    service: S,
    letters: Box<dyn LetterSource>,
}

impl<S: BulkImportService> SaleOrderImporter<S> {
    /// An importer with the given mapping and a random letter supply.
    pub fn new(mapping: ImportMapping, service: S) -> Self {
        Self {
            transformer: RowTransformer::new(mapping),
            service,
            letters: Box::new(RandomLetters),
        }
    }

    /// Replace the letter supply, e.g. with a scripted one.
    #[must_use]
    pub fn with_letters(mut self, letters: Box<dyn LetterSource>) -> Self {
        self.letters = letters;
        self
    }

    pub fn mapping(&self) -> &ImportMapping {
        self.transformer.mapping()
    }

    /// Run one import of `dir/file_name`.
    ///
    /// A file that cannot be opened is recovered locally: the run reports
    /// no outcome instead of returning an error. A row that cannot be
    /// transformed (bad date, missing column) is fatal and nothing is
    /// submitted.
    pub fn run(&mut self, dir: &Path, file_name: &str) -> Result<RunReport> {
        let reader = match open_source(dir, file_name) {
            Ok(reader) => reader,
            Err(e) if e.is_file_access() => {
                warn!(error = %e, "skipping import, source file unavailable");
                return Ok(RunReport {
                    file: dir.join(file_name),
                    rows: 0,
                    outcome: None,
                });
            }
            Err(e) => return Err(e.into()),
        };
        let file = reader.path().to_path_buf();
        reader.require_columns(self.mapping().source_columns())?;

        let mut targets = Vec::new();
        for row in reader.rows() {
            let row = row?;
            targets.push(self.transformer.transform(&row, self.letters.as_mut())?);
        }
        debug!(rows = targets.len(), "transformed source rows");

        let request = ImportRequest::build(self.transformer.mapping(), &targets)?;
        info!(
            schema = %request.res_model,
            rows = targets.len(),
            "submitting import request"
        );
        let outcome = self.service.import(&request)?;
        for error in outcome.errors() {
            if let ImportMessage::Error {
                row,
                field,
                message,
            } = error
            {
                warn!(?row, ?field, message = %message, "import service rejected a record");
            }
        }

        Ok(RunReport {
            file,
            rows: targets.len(),
            outcome: Some(outcome),
        })
    }

    /// The boolean surface the scheduler calls: `true` iff the file was
    /// read, submitted, and the service reported no errors.
    pub fn import_file(&mut self, dir: &Path, file_name: &str) -> Result<bool> {
        Ok(self.run(dir, file_name)?.succeeded())
    }
}
