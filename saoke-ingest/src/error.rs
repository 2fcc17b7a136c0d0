use std::path::PathBuf;

use saoke_core::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("{tool} is not installed or not on PATH")]
    ToolMissing { tool: String },

    #[error("{tool} failed: {message}")]
    Tool { tool: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not read {}: {message}", path.display())]
    Pdf { path: PathBuf, message: String },

    #[error("no table found on page {page} of {}", path.display())]
    TableNotFound { path: PathBuf, page: usize },

    #[error("{bank}: row {row} has {width} columns, column {column} is required")]
    ColumnMissing {
        bank: &'static str,
        row: usize,
        column: usize,
        width: usize,
    },

    #[error("{bank}: row {row}: {source}")]
    Field {
        bank: &'static str,
        row: usize,
        #[source]
        source: FieldError,
    },

    #[error("page {page} of {}: missing {}", path.display(), missing.join(", "))]
    IncompletePage {
        path: PathBuf,
        page: usize,
        missing: Vec<&'static str>,
    },
}
