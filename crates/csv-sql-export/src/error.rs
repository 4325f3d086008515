//! Error types for the CSV to SQL exporter.

use mockdata_core::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting CSV files to SQL.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing, unreadable or malformed CSV input.
    #[error("CSV error in '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Columns and values of a statement differ in length.
    #[error("Column count mismatch for table '{table}': {columns} columns but {values} values")]
    ColumnCountMismatch {
        table: String,
        columns: usize,
        values: usize,
    },

    /// Invalid exporter configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
