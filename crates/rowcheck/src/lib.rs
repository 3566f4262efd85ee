//! Rowcheck: rule-based validation of patient registration records.
//!
//! Each record carries an identity number, full name, age, sex and
//! health-plan category. Rowcheck normalizes the raw values, checks every
//! row against a fixed rule set, flags identity numbers shared by several
//! rows, and annotates each row with a verdict and its reasons.
//!
//! # Example
//!
//! ```
//! use rowcheck::{sample_dataset, validate_table};
//!
//! let validated = validate_table(&sample_dataset()).unwrap();
//! assert_eq!(validated.summary().valid_rows, 2);
//! ```

pub mod error;
pub mod input;
pub mod normalize;
pub mod output;
pub mod schema;
pub mod validation;

mod rowcheck;

pub use crate::rowcheck::{Rowcheck, RowcheckConfig, ValidationReport};
pub use error::{Result, RowcheckError};
pub use input::{sample_dataset, DataTable, KeyboardEntry, RawValue, Record, SourceMetadata};
pub use normalize::NormalizedRecord;
pub use output::OutputFormat;
pub use validation::{
    validate_row, validate_table, RuleConfig, ValidatedTable, ValidationResult,
    ValidationSummary, Violation,
};
