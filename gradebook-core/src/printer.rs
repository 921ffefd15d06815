//! Text table rendering for query results

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, Table};
use tracing::error;

use crate::error::PrintError;

/// A row that can be laid out as table cells.
pub trait TableRow {
    fn cells(&self) -> Vec<String>;
}

impl TableRow for Vec<String> {
    fn cells(&self) -> Vec<String> {
        self.clone()
    }
}

/// Render `rows` under `columns`.
///
/// Returns `Ok(None)` for an empty row list and an error when any row's
/// width differs from the header.
pub fn render_table<R: TableRow>(rows: &[R], columns: &[&str]) -> Result<Option<String>, PrintError> {
    if rows.is_empty() {
        return Ok(None);
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(columns.iter().map(Cell::new));

    for (index, row) in rows.iter().enumerate() {
        let cells = row.cells();
        if cells.len() != columns.len() {
            return Err(PrintError::ShapeMismatch {
                row: index,
                expected: columns.len(),
                actual: cells.len(),
            });
        }
        table.add_row(cells.into_iter().map(Cell::new));
    }

    Ok(Some(table.to_string()))
}

/// Print `rows` as a table on stdout. Absent or empty rows print nothing.
pub fn print_table<R: TableRow>(rows: Option<&[R]>, columns: &[&str]) {
    let Some(rows) = rows else {
        return;
    };
    match render_table(rows, columns) {
        Ok(Some(table)) => println!("{table}"),
        Ok(None) => {}
        Err(e) => error!("Failed to print table: error \"{}\" occurred.", e),
    }
}
