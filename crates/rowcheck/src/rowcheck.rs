//! Main Rowcheck struct and public API.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::validation::{RuleConfig, TableValidator, ValidatedTable, ValidationSummary};

/// Configuration for a validation run.
#[derive(Debug, Clone, Default)]
pub struct RowcheckConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Rule bounds and categories.
    pub rules: RuleConfig,
}

/// Result of validating a data file.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// The annotated table.
    pub table: ValidatedTable,
    /// Verdict and reason counts.
    pub summary: ValidationSummary,
}

/// Loads and validates record tables.
pub struct Rowcheck {
    parser: Parser,
    validator: TableValidator,
}

impl Rowcheck {
    /// Create a Rowcheck instance with the default rule set.
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
            validator: TableValidator::default(),
        }
    }

    /// Create a Rowcheck instance with custom configuration.
    ///
    /// Fails if the rule configuration is incoherent.
    pub fn with_config(config: RowcheckConfig) -> Result<Self> {
        Ok(Self {
            parser: Parser::with_config(config.parser),
            validator: TableValidator::new(&config.rules)?,
        })
    }

    /// Load a file and validate it.
    ///
    /// A file without data rows yields an empty report instead of a schema
    /// error.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> Result<ValidationReport> {
        let (table, source) = self.parser.parse_file(path)?;

        // Nothing to validate: an empty file has no schema to check either.
        let table = if table.is_empty() {
            debug!(file = %source.file, "no rows to validate");
            ValidatedTable {
                headers: table.headers,
                rows: Vec::new(),
            }
        } else {
            self.validator.validate(&table)?
        };
        let summary = table.summary();

        Ok(ValidationReport {
            source,
            table,
            summary,
        })
    }

    /// Validate an in-memory table.
    pub fn validate_table(&self, table: &DataTable) -> Result<ValidatedTable> {
        self.validator.validate(table)
    }
}

impl Default for Rowcheck {
    fn default() -> Self {
        Self::new()
    }
}
