// src/import/json.rs

use crate::core::PrettyTable;
use crate::errors::{AppError, AppResult};
use crate::models::Cell;
use serde_json::{Map, Value};
use std::path::Path;

/// Load a JSON file holding an array of flat objects into `table`.
pub fn load_json(table: &mut PrettyTable, path: &Path) -> AppResult<()> {
    let content = std::fs::read_to_string(path)?;
    load_json_from_str(table, &content)
}

/// Same as [`load_json`] on an in-memory document.
///
/// If the table has no columns yet, they are taken from the keys of the first
/// object (in document order). Every object is then projected onto the column
/// order: missing keys give empty cells, extra keys are ignored.
pub fn load_json_from_str(table: &mut PrettyTable, content: &str) -> AppResult<()> {
    let data: Value = serde_json::from_str(content)
        .map_err(|e| AppError::Parse(format!("Failed to parse JSON data: {e}")))?;

    let Value::Array(items) = data else {
        return Err(AppError::InvalidArgument(
            "JSON data must be an array of objects".into(),
        ));
    };

    if items.is_empty() {
        return Err(AppError::EmptyInput("JSON file contains an empty array".into()));
    }

    for (index, item) in items.iter().enumerate() {
        let object = as_object(index, item)?;

        if !table.has_columns() {
            table.set_columns(object.keys().cloned())?;
        }

        let row = project(index, object, table.column_names())?;
        table.add_row(row).map_err(|e| AppError::at_row(index, e))?;
    }

    Ok(())
}

fn as_object(index: usize, item: &Value) -> AppResult<&Map<String, Value>> {
    let object = item.as_object().ok_or_else(|| {
        AppError::InvalidArgument(format!("Item at index {index} is not an object"))
    })?;

    if object.is_empty() {
        return Err(AppError::InvalidArgument(format!(
            "Object at index {index} has no properties"
        )));
    }

    Ok(object)
}

fn project(index: usize, object: &Map<String, Value>, columns: &[String]) -> AppResult<Vec<Cell>> {
    columns
        .iter()
        .map(|key| match object.get(key) {
            None | Some(Value::Null) => Ok(Cell::empty()),
            Some(Value::String(s)) => Ok(Cell::Text(s.clone())),
            Some(Value::Bool(b)) => Ok(Cell::Bool(*b)),
            Some(Value::Number(n)) => n.as_f64().map(Cell::Number).ok_or_else(|| {
                AppError::InvalidArgument(format!(
                    "Value of \"{key}\" at index {index} is not a finite number: {n}"
                ))
            }),
            Some(Value::Array(_) | Value::Object(_)) => Err(AppError::InvalidArgument(format!(
                "Value of \"{key}\" at index {index} is nested; only flat objects are supported"
            ))),
        })
        .collect()
}
