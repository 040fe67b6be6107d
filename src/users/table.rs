use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use super::record::UserRecord;

pub const NO_DATA: &str = "No data";

/// Render records as a table with an index column, or `No data` when empty.
pub fn render(records: &[UserRecord]) -> String {
    if records.is_empty() {
        return NO_DATA.to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["(index)", "id", "name", "age"]);

    for (index, record) in records.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(record.id.as_str()),
            Cell::new(&record.name),
            Cell::new(record.age).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}
