//! Data source abstraction: raw values, records and tables.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

static MISSING: RawValue = RawValue::Missing;

/// A cell value as handed over by an input provider.
///
/// Providers are free to mix types within a column; normalization takes
/// care of coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Absent or null.
    Missing,
    /// Whole number.
    Integer(i64),
    /// Floating point number. `NaN` counts as missing.
    Float(f64),
    /// Free text, untrimmed.
    Text(String),
}

impl RawValue {
    /// Whether the value represents a missing cell.
    pub fn is_missing(&self) -> bool {
        match self {
            RawValue::Missing => true,
            RawValue::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Convert a JSON value into a raw cell value.
    ///
    /// Booleans, arrays and objects are kept as their JSON text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => RawValue::Missing,
            Value::String(s) => RawValue::Text(s.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(i) => RawValue::Integer(i),
                None => n.as_f64().map(RawValue::Float).unwrap_or(RawValue::Missing),
            },
            other => RawValue::Text(other.to_string()),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Missing => Ok(()),
            RawValue::Integer(i) => write!(f, "{}", i),
            RawValue::Float(v) if v.is_nan() => Ok(()),
            RawValue::Float(v) => write!(f, "{}", v),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Integer(value.into())
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Missing)
    }
}

/// One input row: field name to raw value, in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, RawValue>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<RawValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Get a field. Fields the record does not carry read as missing.
    pub fn get(&self, field: &str) -> &RawValue {
        self.fields.get(field).unwrap_or(&MISSING)
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

}

/// Metadata about a loaded source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, json, ...).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// An ordered batch of records sharing one column set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    /// Column headers, in source order.
    pub headers: Vec<String>,
    /// Records, in source order.
    pub records: Vec<Record>,
}

impl DataTable {
    /// Create an empty table with the given columns.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            records: Vec::new(),
        }
    }

    /// Build a table from records, taking the columns from the union of
    /// their field names in first-seen order.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut headers: Vec<String> = Vec::new();
        for record in &records {
            for name in record.field_names() {
                if !headers.iter().any(|h| h == name) {
                    headers.push(name.to_string());
                }
            }
        }
        Self { headers, records }
    }

    /// Append a record.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the table declares a column.
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_renders_numbers_and_missing() {
        assert_eq!(RawValue::Missing.to_string(), "");
        assert_eq!(RawValue::Integer(17).to_string(), "17");
        assert_eq!(RawValue::Float(17.0).to_string(), "17");
        assert_eq!(RawValue::Float(17.5).to_string(), "17.5");
        assert_eq!(RawValue::Float(f64::NAN).to_string(), "");
        assert_eq!(RawValue::from(" H ").to_string(), " H ");
    }

    #[test]
    fn test_from_json() {
        assert_eq!(RawValue::from_json(&json!(null)), RawValue::Missing);
        assert_eq!(RawValue::from_json(&json!(44)), RawValue::Integer(44));
        assert_eq!(RawValue::from_json(&json!(4.5)), RawValue::Float(4.5));
        assert_eq!(RawValue::from_json(&json!("M")), RawValue::from("M"));
        assert_eq!(RawValue::from_json(&json!(true)), RawValue::from("true"));
    }

    #[test]
    fn test_record_absent_field_reads_missing() {
        let record = Record::new().with("age", 30);
        assert_eq!(record.get("age"), &RawValue::Integer(30));
        assert!(record.get("sex").is_missing());
    }

    #[test]
    fn test_from_records_collects_headers_in_order() {
        let table = DataTable::from_records(vec![
            Record::new().with("a", 1).with("b", 2),
            Record::new().with("c", 3).with("a", 4),
        ]);

        assert_eq!(table.headers, vec!["a", "b", "c"]);
        assert_eq!(table.row_count(), 2);
        assert!(table.records[1].get("b").is_missing());
    }
}
