//! Validation engine: row rules, duplicate detection and table verdicts.

mod config;
mod duplicates;
mod result;
mod row;
mod rules;
mod summary;
mod table;

pub use config::RuleConfig;
pub use duplicates::DuplicateIndex;
pub use result::{ValidationResult, OK_REASON, REASON_SEPARATOR};
pub use row::{validate_row, RowValidator};
pub use rules::{
    AgeRangeRule, DuplicateIdentityRule, IdentityFormatRule, PlanCategoryRule, RowContext,
    RowRule, SexCategoryRule, Violation,
};
pub use summary::ValidationSummary;
pub use table::{validate_table, TableValidator, ValidatedRow, ValidatedTable};
