use std::cmp::Ordering;
use std::fmt;

/// A single scalar table value.
///
/// Null/absent values never reach the table: they are turned into an empty
/// `Text` when the cell is built (see the `Option` conversion).
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    pub fn empty() -> Self {
        Cell::Text(String::new())
    }

    /// Length used for column sizing: number of chars of the stringified value.
    pub fn width(&self) -> usize {
        match self {
            Cell::Text(s) => s.chars().count(),
            other => other.to_string().chars().count(),
        }
    }

    /// Ordering used by `sort_by`.
    ///
    /// Two numbers compare numerically with `f64::total_cmp` (NaN sorts after
    /// every other number), anything else compares by its stringified form.
    pub fn compare(&self, other: &Cell) -> Ordering {
        match (self, other) {
            (Cell::Number(a), Cell::Number(b)) => a.total_cmp(b),
            (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
            (a, b) => a.to_string().cmp(&b.to_string()),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::empty()
    }
}

/// The one stringify function: widths, text grid, HTML and string
/// comparison all go through it.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            // f64 Display is shortest round-trip: 25.0 -> "25", 2.5 -> "2.5"
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<&String> for Cell {
    fn from(s: &String) -> Self {
        Cell::Text(s.clone())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self {
        Cell::Number(f64::from(n))
    }
}

/// Values beyond +/-2^53 are rounded to the nearest representable `f64`.
impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n as f64)
    }
}

impl From<u32> for Cell {
    fn from(n: u32) -> Self {
        Cell::Number(f64::from(n))
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
