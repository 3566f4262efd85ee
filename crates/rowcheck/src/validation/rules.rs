//! Per-row rules and the violations they report.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::normalize::NormalizedRecord;

use super::config::RuleConfig;

/// A single rule failure. Each rule reports at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    /// Identity number is not 7-8 digits.
    InvalidIdentityNumber,
    /// Identity number shared with another row.
    DuplicateIdentityNumber,
    /// Age missing, unparseable or out of range.
    InvalidAge,
    /// Sex outside the accepted categories.
    InvalidSex,
    /// Health plan outside the accepted categories.
    InvalidPlan,
}

impl Violation {
    /// Human-readable reason written to the output.
    pub fn message(&self) -> &'static str {
        match self {
            Violation::InvalidIdentityNumber => "invalid identity number",
            Violation::DuplicateIdentityNumber => "duplicate identity number",
            Violation::InvalidAge => "invalid age",
            Violation::InvalidSex => "invalid sex",
            Violation::InvalidPlan => "invalid plan",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What a rule sees when checking one row.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    /// The normalized row.
    pub record: &'a NormalizedRecord,
    /// Whether the row's identity number occurs more than once in the table.
    pub is_duplicate_identity: bool,
}

/// Trait for row rules.
pub trait RowRule {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Check one row, returning the violation if the rule fails.
    fn check(&self, row: &RowContext<'_>) -> Option<Violation>;
}

/// Identity number must be a run of digits of accepted length.
pub struct IdentityFormatRule {
    pattern: Regex,
}

impl IdentityFormatRule {
    pub fn new(config: &RuleConfig) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(&config.identity_pattern())?,
        })
    }

    /// Whether a normalized identity number has an accepted format.
    pub fn is_match(&self, identity_number: &str) -> bool {
        self.pattern.is_match(identity_number)
    }
}

impl RowRule for IdentityFormatRule {
    fn name(&self) -> &'static str {
        "identity_format"
    }

    fn check(&self, row: &RowContext<'_>) -> Option<Violation> {
        (!self.is_match(&row.record.identity_number)).then_some(Violation::InvalidIdentityNumber)
    }
}

/// Identity number must be unique within the table.
pub struct DuplicateIdentityRule;

impl RowRule for DuplicateIdentityRule {
    fn name(&self) -> &'static str {
        "identity_duplicate"
    }

    fn check(&self, row: &RowContext<'_>) -> Option<Violation> {
        row.is_duplicate_identity
            .then_some(Violation::DuplicateIdentityNumber)
    }
}

/// Age must parse and fall within the inclusive range.
pub struct AgeRangeRule {
    min: i64,
    max: i64,
}

impl AgeRangeRule {
    pub fn new(config: &RuleConfig) -> Self {
        Self {
            min: config.age_min,
            max: config.age_max,
        }
    }
}

impl RowRule for AgeRangeRule {
    fn name(&self) -> &'static str {
        "age_range"
    }

    fn check(&self, row: &RowContext<'_>) -> Option<Violation> {
        match row.record.age {
            Some(age) if (self.min..=self.max).contains(&age) => None,
            _ => Some(Violation::InvalidAge),
        }
    }
}

/// Sex must be one of the canonical categories.
pub struct SexCategoryRule {
    allowed: Vec<String>,
}

impl SexCategoryRule {
    pub fn new(config: &RuleConfig) -> Self {
        Self {
            allowed: config.sex_categories.clone(),
        }
    }
}

impl RowRule for SexCategoryRule {
    fn name(&self) -> &'static str {
        "sex_category"
    }

    fn check(&self, row: &RowContext<'_>) -> Option<Violation> {
        (!self.allowed.contains(&row.record.sex)).then_some(Violation::InvalidSex)
    }
}

/// Health plan must be one of the lower-cased categories.
pub struct PlanCategoryRule {
    allowed: Vec<String>,
}

impl PlanCategoryRule {
    pub fn new(config: &RuleConfig) -> Self {
        Self {
            allowed: config.plan_categories.clone(),
        }
    }
}

impl RowRule for PlanCategoryRule {
    fn name(&self) -> &'static str {
        "plan_category"
    }

    fn check(&self, row: &RowContext<'_>) -> Option<Violation> {
        (!self.allowed.contains(&row.record.health_plan)).then_some(Violation::InvalidPlan)
    }
}
