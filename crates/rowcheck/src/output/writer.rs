//! Serialization of validated tables and incremental output naming.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::error::{Result, RowcheckError};
use crate::schema::{EXPLANATION, IS_VALID};
use crate::validation::ValidatedTable;

/// Default file stem for incrementally named outputs.
pub const DEFAULT_OUTPUT_BASE: &str = "validated_output";

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Write the table as UTF-8 CSV with a header row.
pub fn write_csv<W: Write>(table: &ValidatedTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(table.output_headers())?;
    for row in table.output_rows() {
        csv_writer.write_record(&row)?;
    }
    csv_writer.flush().map_err(|e| RowcheckError::Csv(e.into()))?;
    Ok(())
}

/// Write the table as a pretty-printed JSON array of flat objects.
///
/// `is_valid` is a JSON boolean; every other cell is a string.
pub fn write_json<W: Write>(table: &ValidatedTable, writer: W) -> Result<()> {
    let rows: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            let mut object = Map::new();
            for header in &table.headers {
                object.insert(header.clone(), Value::String(row.get(header).to_string()));
            }
            object.insert(IS_VALID.to_string(), Value::Bool(row.result.is_valid));
            object.insert(EXPLANATION.to_string(), Value::String(row.result.explanation()));
            Value::Object(object)
        })
        .collect();

    serde_json::to_writer_pretty(writer, &rows)?;
    Ok(())
}

/// Write the table to a file in the given format.
pub fn save(table: &ValidatedTable, path: impl AsRef<Path>, format: OutputFormat) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| RowcheckError::io(parent, e))?;
        }
    }

    let file = File::create(path).map_err(|e| RowcheckError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    match format {
        OutputFormat::Csv => write_csv(table, &mut writer)?,
        OutputFormat::Json => write_json(table, &mut writer)?,
    }
    writer.flush().map_err(|e| RowcheckError::io(path, e))?;

    info!(path = %path.display(), rows = table.row_count(), "wrote validated table");
    Ok(())
}

/// Next free `<base>_<n>.<ext>` path in `dir`.
///
/// `n` is one more than the largest numeric suffix already present, or 1.
/// Files whose suffix is not a number are ignored.
pub fn next_output_path(
    dir: impl AsRef<Path>,
    base: &str,
    format: OutputFormat,
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let extension = format.extension();
    let prefix = format!("{}_", base);

    let mut highest = 0u64;
    if dir.exists() {
        let entries = fs::read_dir(dir).map_err(|e| RowcheckError::io(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| RowcheckError::io(dir, e))?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(extension) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(n) = stem
                .strip_prefix(&prefix)
                .and_then(|suffix| suffix.parse::<u64>().ok())
            {
                highest = highest.max(n);
            }
        }
    }

    Ok(dir.join(format!("{}{}.{}", prefix, highest + 1, extension)))
}

/// Save under the next free incremental name and return the path used.
pub fn save_incremental(
    table: &ValidatedTable,
    dir: impl AsRef<Path>,
    base: &str,
    format: OutputFormat,
) -> Result<PathBuf> {
    let path = next_output_path(dir, base, format)?;
    save(table, &path, format)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::sample_dataset;
    use crate::validation::validate_table;
    use tempfile::TempDir;

    #[test]
    fn test_csv_output() {
        let table = validate_table(&sample_dataset()).unwrap();
        let mut buf = Vec::new();
        write_csv(&table, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("identity_number,full_name,age,sex,health_plan,is_valid,explicacion")
        );
        assert_eq!(lines.next(), Some("37290938,Gabriel Palacios,17,M,premium,true,OK"));
        assert_eq!(
            lines.nth(2),
            Some("34965920,Ziggy Treli,500,M,,false,invalid age; invalid plan")
        );
    }

    #[test]
    fn test_json_output() {
        let table = validate_table(&sample_dataset()).unwrap();
        let mut buf = Vec::new();
        write_json(&table, &mut buf).unwrap();

        let value: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["is_valid"], Value::Bool(true));
        assert_eq!(value[2]["explicacion"], "invalid sex");
        assert_eq!(value[1]["age"], "150");
    }

    #[test]
    fn test_incremental_naming() {
        let dir = TempDir::new().unwrap();
        let first = next_output_path(dir.path(), "out", OutputFormat::Csv).unwrap();
        assert_eq!(first.file_name().unwrap(), "out_1.csv");

        fs::write(dir.path().join("out_9.csv"), "").unwrap();
        fs::write(dir.path().join("out_10.csv"), "").unwrap();
        fs::write(dir.path().join("out_final.csv"), "").unwrap();
        fs::write(dir.path().join("out_40.json"), "").unwrap();

        let next = next_output_path(dir.path(), "out", OutputFormat::Csv).unwrap();
        assert_eq!(next.file_name().unwrap(), "out_11.csv");
    }

    #[test]
    fn test_save_incremental_writes_file() {
        let dir = TempDir::new().unwrap();
        let table = validate_table(&sample_dataset()).unwrap();

        let save_next =
            || save_incremental(&table, dir.path(), DEFAULT_OUTPUT_BASE, OutputFormat::Csv);
        let first = save_next().unwrap();
        let second = save_next().unwrap();

        assert!(first.exists());
        assert_eq!(second.file_name().unwrap(), "validated_output_2.csv");
    }
}
