//! Rendering records as SQL `INSERT` statements.

use crate::error::ExportError;
use mockdata_core::{ScalarValue, TabularRecord};
use std::fmt;

/// Wrap text in single quotes, doubling every embedded quote.
pub fn quote_text(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Render a value as a SQL literal.
///
/// Text is quoted, null is the bare `NULL` keyword, numbers use their plain
/// text form.
pub fn render_literal(value: &ScalarValue) -> String {
    match value {
        ScalarValue::Null => "NULL".to_string(),
        ScalarValue::Text(s) => quote_text(s),
        other => other.to_string(),
    }
}

/// One `INSERT INTO <table> (<columns>) VALUES (<values>);` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    table: String,
    columns: Vec<String>,
    values: Vec<ScalarValue>,
}

impl InsertStatement {
    /// Create a statement; `columns` and `values` must have the same length.
    pub fn new(
        table: impl Into<String>,
        columns: Vec<String>,
        values: Vec<ScalarValue>,
    ) -> Result<Self, ExportError> {
        let table = table.into();
        if columns.len() != values.len() {
            return Err(ExportError::ColumnCountMismatch {
                table,
                columns: columns.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            table,
            columns,
            values,
        })
    }

    /// Create a statement inserting `record` into `table`.
    pub fn from_record(table: impl Into<String>, record: &TabularRecord) -> Self {
        Self {
            table: table.into(),
            columns: record.columns().map(str::to_string).collect(),
            values: record.values().cloned().collect(),
        }
    }

    /// Target table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in column order.
    pub fn values(&self) -> &[ScalarValue] {
        &self.values
    }

    /// Rendered literals in column order.
    pub fn literals(&self) -> Vec<String> {
        self.values.iter().map(render_literal).collect()
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "INSERT INTO {} ({}) VALUES ({});",
            self.table,
            self.columns.join(", "),
            self.literals().join(", ")
        )
    }
}
