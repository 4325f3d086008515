//! Reading CSV files into typed records.
//!
//! Every file must start with a header row. Cells are mapped to
//! [`ScalarValue`]s: cells matching a null marker become `Null`, and when type
//! inference is enabled a column whose non-null cells all parse as numbers is
//! read as `Integer` or `Float` instead of text.

use crate::error::ExportError;
use mockdata_core::{ExportConfig, ScalarValue, TabularRecord, DEFAULT_NULL_MARKERS};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Options controlling how CSV cells become values.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Infer integer / float columns
    pub infer_types: bool,
    /// Field delimiter
    pub delimiter: u8,
    /// Cell contents read as null
    pub null_markers: Vec<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            infer_types: true,
            delimiter: b',',
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl ReadOptions {
    /// Build read options from the exporter configuration.
    pub fn from_config(config: &ExportConfig) -> Result<Self, ExportError> {
        Ok(Self {
            infer_types: config.infer_types,
            delimiter: config.delimiter_byte()?,
            null_markers: config.null_markers.clone(),
        })
    }

    /// Read every non-null cell as text.
    pub fn text_only(mut self) -> Self {
        self.infer_types = false;
        self
    }

    fn is_null(&self, cell: &str) -> bool {
        // Empty cells are always missing, even with no markers configured
        let cell = cell.trim();
        cell.is_empty() || self.null_markers.iter().any(|m| m == cell)
    }
}

/// Type inferred for a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    /// Narrow the kind so that it still admits `cell`.
    fn admit(self, cell: &str) -> Self {
        let cell = cell.trim();
        match self {
            ColumnKind::Integer if cell.parse::<i64>().is_ok() => ColumnKind::Integer,
            ColumnKind::Integer | ColumnKind::Float if parse_finite(cell).is_some() => {
                ColumnKind::Float
            }
            _ => ColumnKind::Text,
        }
    }

    fn convert(self, cell: String) -> ScalarValue {
        match self {
            ColumnKind::Integer => match cell.trim().parse::<i64>() {
                Ok(i) => ScalarValue::Integer(i),
                Err(_) => ScalarValue::Text(cell),
            },
            ColumnKind::Float => match parse_finite(&cell) {
                Some(f) => ScalarValue::Float(f),
                None => ScalarValue::Text(cell),
            },
            ColumnKind::Text => ScalarValue::Text(cell),
        }
    }
}

fn parse_finite(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Read CSV data from any reader.
///
/// The first row is the header. Rows whose length differs from the header are
/// rejected by the CSV reader.
pub fn read_records<R: Read>(
    reader: R,
    options: &ReadOptions,
) -> Result<Vec<TabularRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(|h| h.to_string()).collect();
    debug!("CSV headers: {headers:?}");

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    let mut kinds = vec![
        if options.infer_types {
            ColumnKind::Integer
        } else {
            ColumnKind::Text
        };
        headers.len()
    ];

    for result in csv_reader.records() {
        let record = result?;
        let row: Vec<Option<String>> = record
            .iter()
            .zip(kinds.iter_mut())
            .map(|(cell, kind)| {
                if options.is_null(cell) {
                    None
                } else {
                    *kind = kind.admit(cell);
                    Some(cell.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    let records = rows
        .into_iter()
        .map(|row| {
            TabularRecord::from_columns(
                headers.iter().cloned(),
                row.into_iter()
                    .zip(&kinds)
                    .map(|(cell, kind)| match cell {
                        Some(cell) => kind.convert(cell),
                        None => ScalarValue::Null,
                    }),
            )
        })
        .collect();

    Ok(records)
}

/// Read a CSV file from disk.
pub fn read_table(path: &Path, options: &ReadOptions) -> Result<Vec<TabularRecord>, ExportError> {
    let wrap = |source: csv::Error| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::open(path).map_err(|e| wrap(csv::Error::from(e)))?;
    read_records(file, options).map_err(wrap)
}
