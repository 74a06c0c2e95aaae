use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::ImportSummary;

pub fn print_summary(summary: &ImportSummary) {
    let report = &summary.report;
    println!("File: {}", report.file.display());
    if let Some(out) = &summary.out {
        println!("Request buffer: {}", out.display());
    }

    let mut table = Table::new();
    table.set_header(vec!["Rows", "Submitted", "Created", "Errors", "Result"]);
    apply_table_style(&mut table);
    for column in 0..4 {
        if let Some(column) = table.column_mut(column) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    let (submitted, created, errors) = match &report.outcome {
        Some(outcome) => (
            "yes".to_string(),
            outcome.created_count().to_string(),
            outcome.error_count().to_string(),
        ),
        None => ("no".to_string(), "-".to_string(), "-".to_string()),
    };
    let result = if report.succeeded() {
        Cell::new("ok").fg(Color::Green)
    } else {
        Cell::new("failed").fg(Color::Red)
    };
    table.add_row(vec![
        Cell::new(report.rows),
        Cell::new(submitted),
        Cell::new(created),
        Cell::new(errors),
        result,
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
