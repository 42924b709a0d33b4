use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use xlsform_cli::types::FormReport;

pub fn print_summary(report: &FormReport) {
    if !report.form_title.is_empty() {
        println!("Form: {}", report.form_title);
    }
    if !report.form_id.is_empty() {
        println!("ID: {}", report.form_id);
    }
    if !report.version.is_empty() {
        println!("Version: {}", report.version);
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Questions"),
        header_cell("Required"),
        header_cell("With choices"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for group in &report.groups {
        table.add_row(vec![
            Cell::new(&group.title).fg(Color::Blue),
            Cell::new(group.questions),
            count_cell(group.required, Color::Yellow),
            count_cell(group.with_choices, Color::Green),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.questions).add_attribute(Attribute::Bold),
        count_cell(report.required, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(report.with_choices, Color::Green).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
