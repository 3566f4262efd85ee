//! Table validator: schema check, duplicate index, per-row verdicts.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::input::DataTable;
use crate::normalize::{normalize_string, NormalizedRecord};
use crate::schema::{check_required_columns, EXPLANATION, IS_VALID, REQUIRED_FIELDS};

use super::config::RuleConfig;
use super::duplicates::DuplicateIndex;
use super::result::ValidationResult;
use super::row::RowValidator;
use super::summary::ValidationSummary;

/// One annotated output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedRow {
    /// Cell text per carried column. Required fields hold their
    /// normalized (trimmed) text.
    pub fields: IndexMap<String, String>,
    /// The row's verdict.
    pub result: ValidationResult,
}

impl ValidatedRow {
    /// Cell text for a column, empty if the column is not carried.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(|s| s.as_str()).unwrap_or("")
    }
}

/// The annotated table handed to output consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidatedTable {
    /// Carried input columns, in input order.
    pub headers: Vec<String>,
    /// Rows, in input order.
    pub rows: Vec<ValidatedRow>,
}

impl ValidatedTable {
    /// Output columns: carried columns, then the verdict and explanation.
    pub fn output_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .cloned()
            .chain([IS_VALID.to_string(), EXPLANATION.to_string()])
            .collect()
    }

    /// Output rows as plain text cells aligned with [`Self::output_headers`].
    pub fn output_rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows.iter().map(|row| {
            self.headers
                .iter()
                .map(|h| row.get(h).to_string())
                .chain([
                    row.result.is_valid.to_string(),
                    row.result.explanation(),
                ])
                .collect()
        })
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Counts of verdicts and reasons.
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary::from_results(self.rows.iter().map(|r| &r.result))
    }
}

/// Validates whole tables.
pub struct TableValidator {
    rows: RowValidator,
}

impl TableValidator {
    /// Create a table validator using the given rule set.
    pub fn new(config: &RuleConfig) -> Result<Self> {
        Ok(Self {
            rows: RowValidator::new(config)?,
        })
    }

    /// Validate every row of a table.
    ///
    /// Fails before touching any row if a required column is missing. The
    /// input table is left untouched; the output keeps input row order.
    pub fn validate(&self, table: &DataTable) -> Result<ValidatedTable> {
        check_required_columns(table)?;

        let normalized: Vec<NormalizedRecord> = table
            .records
            .iter()
            .map(NormalizedRecord::from_record)
            .collect();

        let index = DuplicateIndex::build(normalized.iter().map(|r| r.identity_number.as_str()));
        debug!(
            rows = normalized.len(),
            duplicated_values = index.duplicates().count(),
            "built identity duplicate index"
        );

        // Columns named like the appended ones are replaced, not repeated.
        let headers: Vec<String> = table
            .headers
            .iter()
            .filter(|h| h.as_str() != IS_VALID && h.as_str() != EXPLANATION)
            .cloned()
            .collect();

        let rows: Vec<ValidatedRow> = table
            .records
            .iter()
            .zip(&normalized)
            .map(|(record, normalized)| {
                let fields = headers
                    .iter()
                    .map(|h| {
                        let value = record.get(h);
                        let text = if REQUIRED_FIELDS.iter().any(|f| *f == h.as_str()) {
                            normalize_string(value)
                        } else {
                            value.to_string()
                        };
                        (h.clone(), text)
                    })
                    .collect();

                let is_duplicate = index.is_duplicate(&normalized.identity_number);
                ValidatedRow {
                    fields,
                    result: self.rows.validate(normalized, is_duplicate),
                }
            })
            .collect();

        let validated = ValidatedTable { headers, rows };
        let summary = validated.summary();
        info!(
            total = summary.total_rows,
            valid = summary.valid_rows,
            invalid = summary.invalid_rows,
            "validated table"
        );

        Ok(validated)
    }
}

impl Default for TableValidator {
    fn default() -> Self {
        Self {
            rows: RowValidator::default(),
        }
    }
}

/// Validate a table against the default rule set.
pub fn validate_table(table: &DataTable) -> Result<ValidatedTable> {
    TableValidator::default().validate(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RowcheckError;
    use crate::input::Record;
    use crate::schema::{AGE, FULL_NAME, HEALTH_PLAN, IDENTITY_NUMBER, SEX};

    fn record(identity: &str, age: i64) -> Record {
        Record::new()
            .with(IDENTITY_NUMBER, identity)
            .with(FULL_NAME, "Fabricio Sbeded")
            .with(AGE, age)
            .with(SEX, "H")
            .with(HEALTH_PLAN, "basico")
    }

    #[test]
    fn test_duplicates_flag_all_occurrences() {
        let table = DataTable::from_records(vec![
            record("37290938", 30),
            record("42441983", 30),
            record(" 37290938 ", 30),
        ]);

        let validated = validate_table(&table).unwrap();
        let reasons: Vec<String> = validated.rows.iter().map(|r| r.result.explanation()).collect();
        assert_eq!(
            reasons,
            vec!["duplicate identity number", "OK", "duplicate identity number"]
        );
    }

    #[test]
    fn test_missing_column_aborts() {
        let table = DataTable::from_records(vec![Record::new()
            .with(IDENTITY_NUMBER, "37290938")
            .with(AGE, 17)]);

        let err = validate_table(&table).unwrap_err();
        assert!(matches!(err, RowcheckError::MissingColumns { .. }));
    }

    #[test]
    fn test_output_columns_and_normalized_text() {
        let table = DataTable::from_records(vec![record(" 1234567 ", 40).with("notes", " keep ")]);

        let validated = validate_table(&table).unwrap();
        assert_eq!(
            validated.output_headers(),
            vec![
                "identity_number",
                "full_name",
                "age",
                "sex",
                "health_plan",
                "notes",
                "is_valid",
                "explicacion"
            ]
        );
        let row: Vec<String> = validated.output_rows().next().unwrap();
        assert_eq!(row[0], "1234567");
        assert_eq!(row[2], "40");
        assert_eq!(row[5], " keep ");
        assert_eq!(row[6], "true");
        assert_eq!(row[7], "OK");
    }

    #[test]
    fn test_existing_verdict_columns_are_replaced() {
        let table = DataTable::from_records(vec![record("1234567", 40)
            .with(IS_VALID, "stale")
            .with(EXPLANATION, "stale")]);

        let validated = validate_table(&table).unwrap();
        assert_eq!(validated.headers.len(), 5);
        assert_eq!(validated.output_headers().len(), 7);
    }

    #[test]
    fn test_input_not_mutated() {
        let table = DataTable::from_records(vec![record(" 1234567 ", 40)]);
        let before = table.clone();

        validate_table(&table).unwrap();
        assert_eq!(table, before);
    }

    #[test]
    fn test_empty_table_with_columns() {
        let table = DataTable::new(REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect());
        let validated = validate_table(&table).unwrap();
        assert!(validated.is_empty());
    }
}
