//! Value types for rows read from tabular input.

use std::fmt;

/// A single atomic field value.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// Missing value
    Null,
    /// Whole number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Free text
    Text(String),
}

impl ScalarValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        ScalarValue::Text(value.into())
    }

    /// Whether this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Whether this value is textual.
    pub fn is_text(&self) -> bool {
        matches!(self, ScalarValue::Text(_))
    }
}

impl fmt::Display for ScalarValue {
    /// Plain text form of the value, without any quoting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => Ok(()),
            ScalarValue::Integer(i) => write!(f, "{i}"),
            // Debug keeps a fractional part on whole floats ("2.0", not "2")
            ScalarValue::Float(v) => write!(f, "{v:?}"),
            ScalarValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Text(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Integer(value)
    }
}

impl From<f64> for ScalarValue {
    fn from(value: f64) -> Self {
        ScalarValue::Float(value)
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ScalarValue::Null)
    }
}

/// One row of an input table: column names and values in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabularRecord {
    fields: Vec<(String, ScalarValue)>,
}

impl TabularRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from parallel column and value lists.
    ///
    /// Extra entries on the longer side are dropped.
    pub fn from_columns<C, V>(columns: C, values: V) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        V: IntoIterator<Item = ScalarValue>,
    {
        Self {
            fields: columns
                .into_iter()
                .map(Into::into)
                .zip(values)
                .collect(),
        }
    }

    /// Append a field at the end of the record.
    pub fn push(&mut self, column: impl Into<String>, value: ScalarValue) {
        self.fields.push((column.into(), value));
    }

    /// Get a value by column name.
    pub fn get(&self, column: &str) -> Option<&ScalarValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Values in column order.
    pub fn values(&self) -> impl Iterator<Item = &ScalarValue> {
        self.fields.iter().map(|(_, value)| value)
    }

    /// Column / value pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
