//! Row validator: the ordered rule list.

use tracing::trace;

use crate::error::Result;
use crate::input::Record;
use crate::normalize::NormalizedRecord;

use super::config::RuleConfig;
use super::result::ValidationResult;
use super::rules::{
    AgeRangeRule, DuplicateIdentityRule, IdentityFormatRule, PlanCategoryRule, RowContext,
    RowRule, SexCategoryRule,
};

/// Runs every rule over a row, in a fixed order, without short-circuiting.
pub struct RowValidator {
    rules: Vec<Box<dyn RowRule>>,
}

impl RowValidator {
    /// Build the rule list from a configuration.
    ///
    /// Order: identity format, identity duplicate, age range, sex category,
    /// plan category. Reasons are reported in this order.
    pub fn new(config: &RuleConfig) -> Result<Self> {
        config.check()?;
        Ok(Self {
            rules: vec![
                Box::new(IdentityFormatRule::new(config)?),
                Box::new(DuplicateIdentityRule),
                Box::new(AgeRangeRule::new(config)),
                Box::new(SexCategoryRule::new(config)),
                Box::new(PlanCategoryRule::new(config)),
            ],
        })
    }

    /// Check one normalized row.
    pub fn validate(
        &self,
        record: &NormalizedRecord,
        is_duplicate_identity: bool,
    ) -> ValidationResult {
        let row = RowContext {
            record,
            is_duplicate_identity,
        };

        let violations = self
            .rules
            .iter()
            .filter_map(|rule| {
                let violation = rule.check(&row);
                if violation.is_some() {
                    trace!(rule = rule.name(), "rule failed");
                }
                violation
            })
            .collect();

        ValidationResult::from_violations(violations)
    }
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new(&RuleConfig::default()).expect("default rule set is valid")
    }
}

/// Normalize a record and check it against the default rule set.
pub fn validate_row(record: &Record, is_duplicate_identity: bool) -> ValidationResult {
    RowValidator::default().validate(&NormalizedRecord::from_record(record), is_duplicate_identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AGE, FULL_NAME, HEALTH_PLAN, IDENTITY_NUMBER, SEX};

    fn record(identity: &str, age: &str, sex: &str, plan: &str) -> Record {
        Record::new()
            .with(IDENTITY_NUMBER, identity)
            .with(FULL_NAME, "Juan Stardust")
            .with(AGE, age)
            .with(SEX, sex)
            .with(HEALTH_PLAN, plan)
    }

    #[test]
    fn test_valid_row() {
        let result = validate_row(&record("37290938", "17", "M", "premium"), false);
        assert!(result.is_valid);
        assert_eq!(result.reasons, vec!["OK"]);
    }

    #[test]
    fn test_all_rules_fail_in_order() {
        let result = validate_row(&record("12ab", "abc", "X", "gold"), true);

        assert!(!result.is_valid);
        assert_eq!(
            result.reasons,
            vec![
                "invalid identity number",
                "duplicate identity number",
                "invalid age",
                "invalid sex",
                "invalid plan",
            ]
        );
    }

    #[test]
    fn test_duplicate_independent_of_format() {
        let result = validate_row(&record("37290938", "30", "H", "basico"), true);
        assert_eq!(result.reasons, vec!["duplicate identity number"]);
    }

    #[test]
    fn test_plan_case_insensitive_input() {
        assert!(validate_row(&record("1234567", "30", "h", "Premium"), false).is_valid);
        assert!(validate_row(&record("1234567", "30", "Hombre", "BASICO"), false).is_valid);
    }

    #[test]
    fn test_custom_config() {
        let config = RuleConfig {
            age_max: 120,
            ..RuleConfig::default()
        };
        let validator = RowValidator::new(&config).unwrap();
        let normalized = NormalizedRecord::from_record(&record("1234567", "110", "M", "basico"));

        assert!(validator.validate(&normalized, false).is_valid);
    }
}
