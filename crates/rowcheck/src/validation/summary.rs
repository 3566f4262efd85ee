//! Aggregate counts over a validated table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::result::ValidationResult;

/// Verdict and reason counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    /// Occurrences of each failure reason, in first-seen order.
    pub reason_counts: IndexMap<String, usize>,
}

impl ValidationSummary {
    /// Tally a sequence of row results.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a ValidationResult>) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.total_rows += 1;
            if result.is_valid {
                summary.valid_rows += 1;
                continue;
            }
            summary.invalid_rows += 1;
            for violation in &result.violations {
                *summary
                    .reason_counts
                    .entry(violation.message().to_string())
                    .or_default() += 1;
            }
        }
        summary
    }

    /// Share of valid rows, 0.0 for an empty table.
    pub fn valid_ratio(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            self.valid_rows as f64 / self.total_rows as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Violation;

    #[test]
    fn test_counts() {
        let results = [
            ValidationResult::from_violations(vec![]),
            ValidationResult::from_violations(vec![Violation::InvalidAge]),
            ValidationResult::from_violations(vec![Violation::InvalidAge, Violation::InvalidPlan]),
        ];

        let summary = ValidationSummary::from_results(&results);
        assert_eq!(summary.total_rows, 3);
        assert_eq!(summary.valid_rows, 1);
        assert_eq!(summary.invalid_rows, 2);
        assert_eq!(summary.reason_counts["invalid age"], 2);
        assert_eq!(summary.reason_counts["invalid plan"], 1);
        assert!((summary.valid_ratio() - 1.0 / 3.0).abs() < 1e-9);
    }
}
