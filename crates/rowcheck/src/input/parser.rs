//! File loaders: CSV/TSV with delimiter detection, and JSON record arrays.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::{DataTable, RawValue, Record, SourceMetadata};
use crate::error::{Result, RowcheckError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Loads tabular data files into a [`DataTable`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    ///
    /// Files ending in `.json` are read as an array of objects; anything
    /// else is treated as delimited text.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| RowcheckError::io(path, e))?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| RowcheckError::io(path, e))?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let is_json = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let (table, format) = if is_json {
            (self.parse_json(&contents)?, "json".to_string())
        } else {
            let delimiter = match self.config.delimiter {
                Some(d) => d,
                None => detect_delimiter(&contents)?,
            };
            let format = match delimiter {
                b'\t' => "tsv",
                b',' => "csv",
                b';' => "csv-semicolon",
                b'|' => "psv",
                _ => "delimited",
            };
            (self.parse_bytes(&contents, delimiter)?, format.to_string())
        };

        debug!(
            file = %path.display(),
            format = %format,
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded input table"
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse delimited bytes. Every cell becomes a text value.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = if self.config.has_header {
            reader.headers()?.iter().map(|s| s.trim().to_string()).collect()
        } else {
            Vec::new()
        };

        let mut table = DataTable::new(headers);

        for (row_idx, result) in reader.records().enumerate() {
            if self.config.max_rows.is_some_and(|max| row_idx >= max) {
                break;
            }

            let row = result?;

            // Without a header row, name columns positionally.
            if table.headers.is_empty() {
                table.headers = (0..row.len()).map(|i| format!("column_{}", i + 1)).collect();
            }

            // Short rows are padded with empty cells; extra cells are dropped.
            let mut record = Record::new();
            for (col_idx, header) in table.headers.iter().enumerate() {
                let cell = row.get(col_idx).unwrap_or("");
                record.insert(header.clone(), cell);
            }
            table.records.push(record);
        }

        if table.headers.is_empty() {
            return Err(RowcheckError::EmptyData("No columns found".to_string()));
        }

        Ok(table)
    }

    /// Parse a JSON document holding an array of flat objects.
    pub fn parse_json(&self, bytes: &[u8]) -> Result<DataTable> {
        let document: Value = serde_json::from_slice(bytes)?;
        let Value::Array(items) = document else {
            return Err(RowcheckError::UnsupportedFormat(
                "JSON input must be an array of objects".to_string(),
            ));
        };

        let limit = self.config.max_rows.unwrap_or(usize::MAX);
        let mut records = Vec::with_capacity(items.len().min(limit));
        for (idx, item) in items.iter().take(limit).enumerate() {
            let Value::Object(fields) = item else {
                return Err(RowcheckError::UnsupportedFormat(format!(
                    "JSON element {} is not an object",
                    idx
                )));
            };
            let record = fields.iter().fold(Record::new(), |record, (name, value)| {
                record.with(name.as_str(), RawValue::from_json(value))
            });
            records.push(record);
        }

        Ok(DataTable::from_records(records))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(RowcheckError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Consistent counts across lines beat raw frequency; tab wins ties.
        let consistent = counts.iter().all(|&c| c == first_count);
        let score = if consistent {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
