use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use radprep_model::ColumnProfile;

use crate::types::{InspectResult, PrepareResult, SplitResult, TableSummary};

pub fn print_prepare_summary(result: &PrepareResult) {
    println!("Output: {}", result.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Identifier"),
        header_cell("Records in"),
        header_cell("Records out"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    add_summary_row(&mut table, "Clinical", &result.clinical);
    add_summary_row(&mut table, "Features", &result.features);
    println!("{table}");
    if let Some(count) = result.outcome_records {
        println!("Outcome records: {count}");
    }
    print_written(&result.written, result.dry_run);
}

pub fn print_split_summary(result: &SplitResult) {
    println!("Output: {}", result.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Clinical records"),
        header_cell("Feature records"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_clinical = 0usize;
    let mut total_features = 0usize;
    for group in &result.groups {
        total_clinical += group.clinical_records;
        total_features += group.feature_records;
        table.add_row(vec![
            Cell::new(&group.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(group.clinical_records),
            Cell::new(group.feature_records),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_clinical).add_attribute(Attribute::Bold),
        Cell::new(total_features).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_written(&result.written, result.dry_run);
}

pub fn print_inspect_report(result: &InspectResult) {
    println!("Table: {}", result.path.display());
    println!("Records: {}", result.records);
    match &result.identifier {
        Some(name) => println!("Identifier: {name}"),
        None => println!("Identifier: (none found)"),
    }
    if !result.candidates.is_empty() {
        println!("Candidates: {}", result.candidates.join(", "));
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Dtype"),
        header_cell("Non-null"),
        header_cell("Distinct"),
        header_cell("Null %"),
        header_cell("Unique"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for (name, profile) in &result.profiles {
        table.add_row(vec![
            column_cell(name, result.identifier.as_deref()),
            dtype_cell(profile),
            Cell::new(profile.non_null),
            Cell::new(profile.distinct),
            Cell::new(format!("{:.1}", profile.null_ratio * 100.0)),
            Cell::new(format!("{:.2}", profile.unique_ratio)),
        ]);
    }
    println!("{table}");
}

fn add_summary_row(table: &mut Table, label: &str, summary: &TableSummary) {
    table.add_row(vec![
        Cell::new(label)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(&summary.identifier),
        Cell::new(summary.records_in),
        Cell::new(summary.records_out),
        Cell::new(summary.columns_out),
    ]);
}

fn print_written(written: &[PathBuf], dry_run: bool) {
    if dry_run {
        println!("Dry run: no files written");
        return;
    }
    for path in written {
        println!("Wrote: {}", path.display());
    }
}

fn column_cell(name: &str, identifier: Option<&str>) -> Cell {
    if identifier == Some(name) {
        Cell::new(name)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(name)
    }
}

fn dtype_cell(profile: &ColumnProfile) -> Cell {
    if profile.is_numeric {
        Cell::new(&profile.dtype).fg(Color::Blue)
    } else {
        Cell::new(&profile.dtype)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
