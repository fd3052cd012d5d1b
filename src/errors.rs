//! Unified application error type.
//! The table model, renderers, import adapters and CLI all return AppError
//! so that callers get one error surface with human-readable messages.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Caller input
    // ---------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Row number {position} out of range, table has {rows} rows")]
    OutOfRange { position: usize, rows: usize },

    #[error("Column \"{0}\" not found in table")]
    NotFound(String),

    // ---------------------------
    // Model state
    // ---------------------------
    #[error("Invalid state: {0}")]
    InvalidState(String),

    // ---------------------------
    // Input data
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Error adding row at index {index}: {source}")]
    Row {
        index: usize,
        #[source]
        source: Box<AppError>,
    },

    #[error("Error adding row at line {line}: {source}")]
    Line {
        line: u64,
        #[source]
        source: Box<AppError>,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub(crate) fn at_row(index: usize, source: AppError) -> Self {
        AppError::Row {
            index,
            source: Box::new(source),
        }
    }

    pub(crate) fn at_line(line: u64, source: AppError) -> Self {
        AppError::Line {
            line,
            source: Box::new(source),
        }
    }

    /// Innermost error, skipping row/line location wrappers.
    pub fn root(&self) -> &AppError {
        match self {
            AppError::Row { source, .. } | AppError::Line { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
