//! Aligned table output for tab-separated renders

use comfy_table::{presets::NOTHING, Table};
use std::io::{self, Write};

/// Gap between aligned columns
const COLUMN_GAP: u16 = 3;

/// Print tab-separated lines as a borderless, space-aligned table
pub fn write_aligned(out: &mut dyn Write, rendered: &str) -> io::Result<()> {
    if rendered.is_empty() {
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    for line in rendered.lines() {
        table.add_row(line.split('\t').collect::<Vec<_>>());
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, COLUMN_GAP));
    }

    for line in table.lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
