use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use namelink_validate::{Issue, Severity, ValidationReport};

use crate::types::{MatchOutcome, NormalizedName};

pub fn print_match_summary(outcome: &MatchOutcome) {
    println!("Input: {} [{}]", outcome.input.display(), outcome.column);
    println!(
        "Reference: {} ({} candidates)",
        outcome.reference, outcome.candidates
    );
    if let Some(path) = &outcome.output {
        println!("Output: {}", path.display());
    }

    let summary = &outcome.summary;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Matched"),
        header_cell("Unmatched"),
        header_cell("Multi"),
        header_cell("Match rate"),
        header_cell("Mean score"),
        header_cell("Floor"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.rows).add_attribute(Attribute::Bold),
        count_cell(summary.matched, Color::Green),
        count_cell(summary.unmatched, Color::Yellow),
        count_cell(summary.multi_matched, Color::Blue),
        Cell::new(format!("{:.1}%", summary.match_rate() * 100.0)),
        match summary.mean_best_score {
            Some(score) => Cell::new(format!("{score:.4}")),
            None => dim_cell("-"),
        },
        Cell::new(format!("{:.2}", outcome.threshold)),
    ]);
    println!("{table}");
    println!("Elapsed: {} ms", outcome.elapsed.as_millis());
}

pub fn print_normalized(names: &[NormalizedName]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Normalized"),
        header_cell("Variants"),
    ]);
    apply_table_style(&mut table);
    for name in names {
        let normalized = if name.normalized.is_empty() {
            dim_cell("(empty)")
        } else {
            Cell::new(&name.normalized).add_attribute(Attribute::Bold)
        };
        let variants = if name.variants.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(name.variants.join("\n"))
        };
        table.add_row(vec![Cell::new(&name.raw), normalized, variants]);
    }
    println!("{table}");
}

pub fn print_validation_report(report: &ValidationReport) {
    if report.is_empty() {
        println!("No issues: accepted");
        return;
    }

    let mut issues: Vec<&Issue> = report.issues.iter().collect();
    issues.sort_by_key(|issue| severity_rank(issue.severity()));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for issue in issues {
        table.add_row(vec![
            severity_cell(issue.severity()),
            Cell::new(issue.column()),
            match issue.count() {
                Some(count) => Cell::new(count).fg(severity_color(issue.severity())),
                None => dim_cell("-"),
            },
            Cell::new(issue.message()),
        ]);
    }
    println!("{table}");
    println!(
        "{} errors, {} warnings: {}",
        report.error_count(),
        report.warning_count(),
        if report.is_accepted() {
            "accepted"
        } else {
            "rejected"
        }
    );
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 0,
        Severity::Warning => 1,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
