//! Rule-set configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RowcheckError};

/// Bounds and categories used by the row rules.
///
/// The defaults are the fixed rule set; a JSON file may override any
/// subset of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Minimum accepted age, inclusive.
    pub age_min: i64,
    /// Maximum accepted age, inclusive.
    pub age_max: i64,
    /// Minimum number of identity-number digits.
    pub identity_min_digits: usize,
    /// Maximum number of identity-number digits.
    pub identity_max_digits: usize,
    /// Accepted canonical sex categories.
    pub sex_categories: Vec<String>,
    /// Accepted lower-cased health-plan categories.
    pub plan_categories: Vec<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            age_min: 0,
            age_max: 100,
            identity_min_digits: 7,
            identity_max_digits: 8,
            sex_categories: vec!["H".to_string(), "M".to_string()],
            plan_categories: vec!["basico".to_string(), "premium".to_string()],
        }
    }
}

impl RuleConfig {
    /// Load a rule configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| RowcheckError::io(path, e))?;
        let config: RuleConfig = serde_json::from_reader(BufReader::new(file))?;
        config.check()?;
        Ok(config)
    }

    /// Check that the bounds are coherent.
    pub fn check(&self) -> Result<()> {
        if self.age_min > self.age_max {
            return Err(RowcheckError::Config(format!(
                "age_min ({}) is greater than age_max ({})",
                self.age_min, self.age_max
            )));
        }
        if self.identity_min_digits == 0 || self.identity_min_digits > self.identity_max_digits {
            return Err(RowcheckError::Config(format!(
                "invalid identity digit bounds {}..={}",
                self.identity_min_digits, self.identity_max_digits
            )));
        }
        Ok(())
    }

    /// Anchored pattern matching an identity number of accepted length.
    pub fn identity_pattern(&self) -> String {
        format!(
            r"^\d{{{},{}}}$",
            self.identity_min_digits, self.identity_max_digits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_pattern() {
        assert_eq!(RuleConfig::default().identity_pattern(), r"^\d{7,8}$");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: RuleConfig = serde_json::from_str(r#"{"age_max": 120}"#).unwrap();

        assert_eq!(config.age_max, 120);
        assert_eq!(config.age_min, 0);
        assert_eq!(config.plan_categories, vec!["basico", "premium"]);
    }

    #[test]
    fn test_check_rejects_inverted_bounds() {
        let config = RuleConfig {
            age_min: 50,
            age_max: 10,
            ..RuleConfig::default()
        };
        assert!(matches!(config.check(), Err(RowcheckError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"plan_categories": ["basico", "premium", "gold"]}}"#).unwrap();

        let config = RuleConfig::load(file.path()).unwrap();
        assert_eq!(config.plan_categories.len(), 3);
    }
}
