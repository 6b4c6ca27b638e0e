//! Aligned-column rendering of the feature table for the console.

use crate::models::{FeatureRow, COLUMNS};

const COLUMN_GAP: &str = "  ";

/// Render rows as left-aligned text columns under a header line.
///
/// Example output:
/// ```text
/// Screen_Section        Component          ...
/// Navigation (Sidebar)  Sidebar Menu Item  ...
/// ```
pub fn render_table(rows: &[FeatureRow]) -> String {
    let widths = column_widths(rows);
    let mut output = String::new();

    render_line(&mut output, COLUMNS, &widths);
    for row in rows {
        render_line(&mut output, row.fields(), &widths);
    }
    output
}

/// Widest cell per column, header included, counted in characters.
fn column_widths(rows: &[FeatureRow]) -> [usize; 8] {
    let mut widths = COLUMNS.map(|name| name.chars().count());
    for row in rows {
        for (width, field) in widths.iter_mut().zip(row.fields()) {
            *width = (*width).max(field.chars().count());
        }
    }
    widths
}

fn render_line(output: &mut String, cells: [&str; 8], widths: &[usize; 8]) {
    let start = output.len();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            output.push_str(COLUMN_GAP);
        }
        output.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        output.extend(std::iter::repeat(' ').take(pad));
    }
    // Last column is padded too; drop it.
    let trimmed = output[start..].trim_end().len();
    output.truncate(start + trimmed);
    output.push('\n');
}
