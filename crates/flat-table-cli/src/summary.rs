use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use flat_table_cli::commands::BuildReport;
use flat_table_model::ColumnDefinition;

pub fn print_summary(report: &BuildReport) {
    let output = &report.output;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Id"),
        header_cell("Group"),
        header_cell("Name"),
        header_cell("Type"),
        header_cell("Frozen"),
        header_cell("Editor"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    align_column(&mut table, 5, CellAlignment::Center);
    align_column(&mut table, 6, CellAlignment::Center);
    for (index, column) in output.columns.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index),
            id_cell(column),
            group_cell(&column.column_group),
            Cell::new(&column.name),
            Cell::new(if column.is_numeric() { "number" } else { "string" }),
            flag_cell(column.frozen),
            editor_cell(column),
        ]);
    }
    println!("{table}");

    let frozen = match output.options.frozen_column {
        Some(index) => format!("up to column {index}"),
        None => "none".to_string(),
    };
    println!(
        "Columns: {} of {} entries ({} hidden)",
        output.columns.len(),
        report.total_entries,
        report.hidden_entries
    );
    println!("Frozen: {frozen}");
    println!("Rows: {}", output.dataset.len());
    if !report.duplicate_headers.is_empty() {
        eprintln!("Duplicate headers:");
        for header in &report.duplicate_headers {
            eprintln!("- {header}");
        }
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn id_cell(column: &ColumnDefinition) -> Cell {
    let cell = Cell::new(&column.id).add_attribute(Attribute::Bold);
    if column.frozen {
        cell.fg(Color::Blue)
    } else {
        cell
    }
}

fn group_cell(group: &str) -> Cell {
    if group.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(group)
    }
}

fn flag_cell(value: bool) -> Cell {
    if value {
        Cell::new("✓").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn editor_cell(column: &ColumnDefinition) -> Cell {
    match column.editor {
        Some(editor) => Cell::new(format!("float({})", editor.params.decimal_places))
            .fg(Color::Yellow),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
