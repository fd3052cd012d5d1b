//! HTML table serialization.
//!
//! Values are interpolated verbatim: column names, cells and attribute values
//! are NOT escaped. Callers feeding untrusted data must escape it beforehand.

use crate::core::PrettyTable;
use crate::errors::{AppError, AppResult};

/// Render the table as a single-line `<table>` element.
///
/// `attributes` are written as `key='value'` in iteration order.
pub fn render<I, K, V>(table: &PrettyTable, attributes: I) -> AppResult<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    if !table.has_columns() {
        return Err(AppError::InvalidState(
            "Cannot generate HTML for a table with no columns".into(),
        ));
    }

    let attrs: Vec<String> = attributes
        .into_iter()
        .map(|(k, v)| format!("{}='{}'", k.as_ref(), v.as_ref()))
        .collect();

    let mut html = if attrs.is_empty() {
        String::from("<table>")
    } else {
        format!("<table {}>", attrs.join(" "))
    };

    html.push_str("<thead><tr>");
    for name in table.column_names() {
        html.push_str(&format!("<th>{name}</th>"));
    }
    html.push_str("</tr></thead>");

    html.push_str("<tbody>");
    for row in table.rows() {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody>");

    html.push_str("</table>");
    Ok(html)
}

/// Same as [`render`] without attributes.
pub fn render_plain(table: &PrettyTable) -> AppResult<String> {
    render(table, std::iter::empty::<(&str, &str)>())
}
