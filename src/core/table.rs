//! In-memory table model: column names, rows and cached column widths.

use crate::errors::{AppError, AppResult};
use crate::models::Cell;
use crate::render;
use std::fmt;

/// An owned table.
///
/// `max_width[i]` is a high-water mark of the width of column `i`: it grows on
/// `set_columns` / `add_row` and is only brought back to the header widths by
/// `clear()`. Deleting or sorting rows never shrinks it.
#[derive(Debug, Clone, Default)]
pub struct PrettyTable {
    column_names: Vec<String>,
    rows: Vec<Vec<Cell>>,
    max_width: Vec<usize>,
}

impl PrettyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define the column headers.
    ///
    /// Fails with `InvalidArgument` on an empty list and with `InvalidState`
    /// when rows already exist (call `clear()` or `reset()` first).
    pub fn set_columns<I, S>(&mut self, names: I) -> AppResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(AppError::InvalidArgument(
                "Column names array cannot be empty".into(),
            ));
        }

        if !self.rows.is_empty() {
            return Err(AppError::InvalidState(format!(
                "Cannot redefine columns while the table has {} rows; clear the table first",
                self.rows.len()
            )));
        }

        self.max_width = names.iter().map(|n| n.chars().count()).collect();
        self.column_names = names;
        Ok(())
    }

    /// Append a row. The row must have exactly one cell per column.
    pub fn add_row<I, C>(&mut self, row: I) -> AppResult<()>
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        if self.column_names.is_empty() {
            return Err(AppError::InvalidState(
                "No columns defined. Call set_columns() before adding rows".into(),
            ));
        }

        let row: Vec<Cell> = row.into_iter().map(Into::into).collect();

        if row.len() != self.column_names.len() {
            return Err(AppError::InvalidArgument(format!(
                "Row length ({}) does not match number of columns ({})",
                row.len(),
                self.column_names.len()
            )));
        }

        for (width, cell) in self.max_width.iter_mut().zip(&row) {
            *width = (*width).max(cell.width());
        }

        self.rows.push(row);
        Ok(())
    }

    /// Set the headers and add every row in order.
    ///
    /// A failing row is reported with its 0-based index. Rows added before the
    /// failure stay in the table.
    pub fn create_from_rows<H, S, R, I, C>(&mut self, headers: H, rows: R) -> AppResult<()>
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.set_columns(headers)?;

        for (index, row) in rows.into_iter().enumerate() {
            self.add_row(row).map_err(|e| AppError::at_row(index, e))?;
        }

        Ok(())
    }

    /// Stable in-place sort on the named column.
    pub fn sort_by(&mut self, column: &str, descending: bool) -> AppResult<()> {
        if column.is_empty() {
            return Err(AppError::InvalidArgument(
                "Column name must be a non-empty string".into(),
            ));
        }

        let idx = self
            .column_index(column)
            .ok_or_else(|| AppError::NotFound(column.to_string()))?;

        if self.rows.is_empty() {
            return Ok(());
        }

        if descending {
            self.rows.sort_by(|a, b| b[idx].compare(&a[idx]));
        } else {
            self.rows.sort_by(|a, b| a[idx].compare(&b[idx]));
        }

        Ok(())
    }

    /// Remove the row at the 1-based `position`.
    pub fn delete_row(&mut self, position: usize) -> AppResult<()> {
        if position == 0 || position > self.rows.len() {
            return Err(AppError::OutOfRange {
                position,
                rows: self.rows.len(),
            });
        }

        self.rows.remove(position - 1);
        Ok(())
    }

    /// Drop all rows, keep the columns.
    pub fn clear(&mut self) -> AppResult<()> {
        if self.column_names.is_empty() {
            return Err(AppError::InvalidState(
                "Cannot clear table with no columns defined".into(),
            ));
        }

        self.rows.clear();
        self.max_width = self
            .column_names
            .iter()
            .map(|n| n.chars().count())
            .collect();
        Ok(())
    }

    /// Back to the empty initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn max_widths(&self) -> &[usize] {
        &self.max_width
    }

    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_columns(&self) -> bool {
        !self.column_names.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }
}

impl fmt::Display for PrettyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::text::render(self))
    }
}
