//! Field names and the required-column check.

use crate::error::{Result, RowcheckError};
use crate::input::DataTable;

/// National identity number.
pub const IDENTITY_NUMBER: &str = "identity_number";
/// First and last name.
pub const FULL_NAME: &str = "full_name";
/// Age in whole years.
pub const AGE: &str = "age";
/// Sex category.
pub const SEX: &str = "sex";
/// Health-plan category.
pub const HEALTH_PLAN: &str = "health_plan";

/// Verdict column appended to the output.
pub const IS_VALID: &str = "is_valid";
/// Reasons column appended to the output.
pub const EXPLANATION: &str = "explicacion";

/// Columns every input table must declare, in output order.
pub const REQUIRED_FIELDS: [&str; 5] = [IDENTITY_NUMBER, FULL_NAME, AGE, SEX, HEALTH_PLAN];

/// Fail if the table does not declare every required column.
///
/// The error names the missing columns and the full expected set.
pub fn check_required_columns(table: &DataTable) -> Result<()> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !table.has_column(field))
        .map(|field| field.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RowcheckError::MissingColumns {
            missing,
            expected: REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_columns_present() {
        let table = DataTable::new(REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect());
        assert!(check_required_columns(&table).is_ok());
    }

    #[test]
    fn test_missing_columns_are_named() {
        let table = DataTable::new(vec![IDENTITY_NUMBER.to_string(), AGE.to_string()]);

        match check_required_columns(&table) {
            Err(RowcheckError::MissingColumns { missing, expected }) => {
                assert_eq!(missing, vec![FULL_NAME, SEX, HEALTH_PLAN]);
                assert_eq!(expected.len(), 5);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_error_message_lists_fields() {
        let table = DataTable::new(vec![]);
        let message = check_required_columns(&table).unwrap_err().to_string();

        assert!(message.contains("identity_number"));
        assert!(message.contains("Expected"));
    }
}
