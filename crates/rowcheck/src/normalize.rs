//! Field normalization: raw cell values into canonical comparable forms.
//!
//! All functions here are pure. Missing values normalize to the empty
//! string, which every downstream rule then rejects on its own terms.

use serde::Serialize;

use crate::input::{RawValue, Record};
use crate::schema::{AGE, FULL_NAME, HEALTH_PLAN, IDENTITY_NUMBER, SEX};

/// Trimmed text form of a value; empty for missing values.
pub fn normalize_string(value: &RawValue) -> String {
    if value.is_missing() {
        return String::new();
    }
    value.to_string().trim().to_string()
}

/// Canonical sex category.
///
/// `H`/`HOMBRE` become `H`, `M`/`MUJER` become `M`, case-insensitively.
/// Anything else is returned trimmed and upper-cased so the category rule
/// can reject it.
pub fn normalize_sex(value: &RawValue) -> String {
    let upper = normalize_string(value).to_uppercase();
    match upper.as_str() {
        "H" | "HOMBRE" => "H".to_string(),
        "M" | "MUJER" => "M".to_string(),
        _ => upper,
    }
}

/// Age as an integer, or `None` when the value does not parse.
///
/// `None` never satisfies an age range.
pub fn normalize_age(value: &RawValue) -> Option<i64> {
    normalize_string(value).parse::<i64>().ok()
}

/// Lower-cased health-plan category.
pub fn normalize_plan(value: &RawValue) -> String {
    normalize_string(value).to_lowercase()
}

/// The rule-facing view of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    pub identity_number: String,
    pub full_name: String,
    pub age: Option<i64>,
    pub sex: String,
    pub health_plan: String,
}

impl NormalizedRecord {
    /// Normalize the required fields of a record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            identity_number: normalize_string(record.get(IDENTITY_NUMBER)),
            full_name: normalize_string(record.get(FULL_NAME)),
            age: normalize_age(record.get(AGE)),
            sex: normalize_sex(record.get(SEX)),
            health_plan: normalize_plan(record.get(HEALTH_PLAN)),
        }
    }
}
