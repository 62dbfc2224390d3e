use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use switcheroo_core::SwitchOutcome;

pub fn print_summary(outcome: &SwitchOutcome, feature: &str) {
    println!("{}", summary_table(outcome, feature));
}

pub fn summary_table(outcome: &SwitchOutcome, feature: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Feature"), Cell::new(feature)]);
    table.add_row(vec![
        Cell::new("Key table entries"),
        count_cell(outcome.key_entries),
    ]);
    table.add_row(vec![
        Cell::new("Lines read"),
        count_cell(outcome.stats.lines_read),
    ]);
    table.add_row(vec![
        Cell::new("Lines rewritten"),
        count_cell(outcome.stats.lines_matched).fg(if outcome.stats.lines_matched == 0 {
            Color::Yellow
        } else {
            Color::Green
        }),
    ]);
    table.add_row(vec![
        Cell::new("Output"),
        Cell::new(outcome.output.display()),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    Cell::new(count).set_alignment(CellAlignment::Right)
}
