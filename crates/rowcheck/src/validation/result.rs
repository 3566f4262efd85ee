//! Per-row verdicts.

use serde::{Deserialize, Serialize};

use super::rules::Violation;

/// Reason reported for a row that passes every rule.
pub const OK_REASON: &str = "OK";

/// Separator used when joining reasons into one cell.
pub const REASON_SEPARATOR: &str = "; ";

/// Outcome of checking one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no rule failed.
    pub is_valid: bool,
    /// `["OK"]` when valid, otherwise one message per failed rule in rule order.
    pub reasons: Vec<String>,
    /// The failed rules, in rule order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    /// Build a result from the violations collected for a row.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        let is_valid = violations.is_empty();
        let reasons = if is_valid {
            vec![OK_REASON.to_string()]
        } else {
            violations.iter().map(|v| v.message().to_string()).collect()
        };

        Self {
            is_valid,
            reasons,
            violations,
        }
    }

    /// Reasons joined into a single explanation.
    pub fn explanation(&self) -> String {
        self.reasons.join(REASON_SEPARATOR)
    }
}
