//! Formatting helpers used by the text renderer.

/// Pad `s` with spaces on the right up to `width` chars.
/// Strings already `width` chars or longer are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
