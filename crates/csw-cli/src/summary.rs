use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use csw_model::IssueSeverity;

use crate::types::BatchResult;

pub fn print_summary(result: &BatchResult) {
    println!("Input: {}", result.input.display());
    println!("Column: {}", result.column);
    if let Some(path) = &result.output_path {
        println!("Output: {}", path.display());
    }
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Outcome"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("switched"), Cell::new(result.switched)]);
    table.add_row(vec![
        Cell::new("passed through"),
        Cell::new(result.passed_through),
    ]);
    table.add_row(vec![Cell::new("skipped"), Cell::new(result.skipped)]);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!(
        "{} spans replaced, {} warnings",
        result.replacements,
        result.report.warning_count()
    );
    print_issue_table(result);
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn print_issue_table(result: &BatchResult) {
    if result.report.issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Code"),
        header_cell("Severity"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    const MAX_ISSUE_ROWS: usize = 20;
    for issue in result.report.issues.iter().take(MAX_ISSUE_ROWS) {
        let severity_cell = match issue.severity {
            IssueSeverity::Error => Cell::new("error").fg(Color::Red),
            IssueSeverity::Warning => Cell::new("warning").fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(issue.row),
            Cell::new(issue.code.as_str()),
            severity_cell,
            Cell::new(&issue.message),
        ]);
    }
    println!("{table}");
    if result.report.issues.len() > MAX_ISSUE_ROWS {
        println!(
            "... and {} more (see the JSON report)",
            result.report.issues.len() - MAX_ISSUE_ROWS
        );
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
