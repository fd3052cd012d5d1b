// src/import/mod.rs

pub mod csv;
pub mod json;

pub use self::csv::{load_csv, load_csv_from_reader};
pub use self::json::{load_json, load_json_from_str};

use crate::core::PrettyTable;
use crate::errors::AppResult;
use std::path::Path;

/// Input file kinds understood by the loaders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Json,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Csv => "CSV",
            SourceKind::Json => "JSON",
        }
    }

    /// Load `path` into `table` with the matching adapter.
    pub fn load(&self, table: &mut PrettyTable, path: &Path) -> AppResult<()> {
        match self {
            SourceKind::Csv => load_csv(table, path),
            SourceKind::Json => load_json(table, path),
        }
    }
}
