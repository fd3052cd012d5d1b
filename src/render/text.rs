//! Fixed-width ASCII grid rendering.
//!
//! ```text
//! +----+---+
//! | a  | b |
//! +----+---+
//! | 1  | 2 |
//! | 33 | 4 |
//! +----+---+
//! ```
//!
//! Header and data lines carry a trailing space after the last `|`.

use crate::core::PrettyTable;
use crate::utils::formatting::pad_right;

/// Render the table as a grid. Every line ends with `\n`.
/// A table without columns renders as the empty string.
pub fn render(table: &PrettyTable) -> String {
    if !table.has_columns() {
        return String::new();
    }

    let widths = table.max_widths();
    let border = border_line(widths);

    let mut out = String::new();

    out.push_str(&border);
    out.push('\n');
    out.push_str(&content_line(table.column_names(), widths));
    out.push('\n');
    out.push_str(&border);
    out.push('\n');

    for row in table.rows() {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        out.push_str(&content_line(&cells, widths));
        out.push('\n');
    }

    out.push_str(&border);
    out.push('\n');
    out
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn content_line<S: AsRef<str>>(values: &[S], widths: &[usize]) -> String {
    let mut line = String::from("| ");
    for (value, w) in values.iter().zip(widths) {
        line.push_str(&pad_right(value.as_ref(), *w));
        line.push_str(" | ");
    }
    line
}
