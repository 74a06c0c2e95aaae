use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use soi_import::{
    BulkImportService, ImportError, ImportRequest, RunReport, SaleOrderImporter,
};
use soi_model::{FieldTransform, ImportMapping, ImportOutcome};

use crate::cli::ImportArgs;
use crate::summary::apply_table_style;

/// What one `soi import` invocation produced.
#[derive(Debug)]
pub struct ImportSummary {
    pub report: RunReport,
    pub out: Option<PathBuf>,
}

/// The CLI's stand-in for the host platform's import facility: it hands
/// the prepared buffer off to disk for the host to consume. A handoff that
/// lands on disk reports an empty (successful) outcome.
struct RequestWriter {
    out: Option<PathBuf>,
}

impl BulkImportService for RequestWriter {
    fn import(&self, request: &ImportRequest) -> soi_import::Result<ImportOutcome> {
        if let Some(path) = &self.out {
            fs::write(path, &request.file).map_err(|e| ImportError::Service {
                message: format!("failed to write request buffer to {}: {e}", path.display()),
            })?;
            info!(path = %path.display(), "wrote request buffer");
        }
        Ok(ImportOutcome::default())
    }
}

pub fn run_import(args: &ImportArgs) -> Result<ImportSummary> {
    let span = info_span!("import", file = %args.file);
    let _guard = span.enter();
    let service = RequestWriter {
        out: args.out.clone(),
    };
    let mut importer = SaleOrderImporter::new(ImportMapping::sale_order(), service);
    let report = importer
        .run(&args.dir, &args.file)
        .context("import sale orders")?;
    Ok(ImportSummary {
        report,
        out: args.out.clone(),
    })
}

pub fn run_mapping() -> Result<()> {
    let mapping = ImportMapping::sale_order();
    let mut table = Table::new();
    table.set_header(vec!["Source column", "Target field", "Transform"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "(generated)".to_string(),
        mapping.id_field.clone(),
        "external id".to_string(),
    ]);
    for field in &mapping.fields {
        let transform = match &field.transform {
            FieldTransform::Verbatim => "verbatim".to_string(),
            FieldTransform::Date { from, to } => format!("date {from} -> {to}"),
        };
        table.add_row(vec![
            field.source_column.clone(),
            field.target_field.clone(),
            transform,
        ]);
    }
    println!("Schema: {}", mapping.schema);
    println!("{table}");
    Ok(())
}
