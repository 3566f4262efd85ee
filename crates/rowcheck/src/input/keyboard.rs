//! Interactive record entry.

use std::io::{BufRead, Write};

use tracing::debug;

use super::source::{DataTable, Record};
use crate::error::{Result, RowcheckError};
use crate::schema::{AGE, FULL_NAME, HEALTH_PLAN, IDENTITY_NUMBER, REQUIRED_FIELDS, SEX};
use crate::validation::{IdentityFormatRule, RuleConfig};

/// Prompts an operator for records until an empty identity number.
///
/// Identity numbers are checked on entry and re-prompted when malformed;
/// every other field is taken as typed and left to the validator.
pub struct KeyboardEntry {
    identity: IdentityFormatRule,
}

impl KeyboardEntry {
    pub fn new(config: &RuleConfig) -> Result<Self> {
        Ok(Self {
            identity: IdentityFormatRule::new(config)?,
        })
    }

    /// Read records from `input`, writing prompts to `output`.
    ///
    /// End of input stops entry; a partially typed record is dropped.
    pub fn read_table<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<DataTable> {
        let mut table = DataTable::new(REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect());

        writeln!(output, "Keyboard entry. Leave the identity number empty to finish.\n")
            .map_err(RowcheckError::Terminal)?;

        loop {
            let label = "Identity number (Enter to finish): ";
            let Some(identity) = prompt(&mut input, &mut output, label)? else {
                break;
            };
            if identity.is_empty() {
                break;
            }
            if !self.identity.is_match(&identity) {
                writeln!(output, "Invalid identity number format. Try again.\n")
                    .map_err(RowcheckError::Terminal)?;
                continue;
            }

            let mut record = Record::new().with(IDENTITY_NUMBER, identity);
            let fields = [
                (FULL_NAME, "Full name: "),
                (AGE, "Age: "),
                (SEX, "Sex (Hombre/Mujer): "),
                (HEALTH_PLAN, "Plan (Basico/Premium): "),
            ];
            let mut complete = true;
            for (field, label) in fields {
                match prompt(&mut input, &mut output, label)? {
                    Some(value) => record.insert(field, value),
                    None => {
                        complete = false;
                        break;
                    }
                }
            }
            if !complete {
                break;
            }

            table.push(record);
            debug!(rows = table.row_count(), "record added");
            writeln!(output, "Record added.\n").map_err(RowcheckError::Terminal)?;
        }

        if table.is_empty() {
            writeln!(output, "No records entered.").map_err(RowcheckError::Terminal)?;
        }

        Ok(table)
    }
}

/// Print a label and read one trimmed line; `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{}", label).map_err(RowcheckError::Terminal)?;
    output.flush().map_err(RowcheckError::Terminal)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(RowcheckError::Terminal)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RawValue;

    fn entry() -> KeyboardEntry {
        KeyboardEntry::new(&RuleConfig::default()).unwrap()
    }

    #[test]
    fn test_reads_records_until_blank() {
        let input = "37290938\nGabriel Palacios\n17\nHombre\nPremium\n\n";
        let mut output = Vec::new();

        let table = entry().read_table(input.as_bytes(), &mut output).unwrap();

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.records[0].get(SEX), &RawValue::from("Hombre"));
        assert_eq!(table.records[0].get(AGE), &RawValue::from("17"));
        assert!(String::from_utf8(output).unwrap().contains("Record added."));
    }

    #[test]
    fn test_reprompts_malformed_identity() {
        let input = "12ab\n42441983\nMariela Lana\n20\nMujer\nBasico\n";
        let mut output = Vec::new();

        let table = entry().read_table(input.as_bytes(), &mut output).unwrap();

        assert_eq!(table.row_count(), 1);
        assert_eq!(table.records[0].get(IDENTITY_NUMBER), &RawValue::from("42441983"));
        assert!(String::from_utf8(output).unwrap().contains("Invalid identity number format"));
    }

    #[test]
    fn test_partial_record_dropped_at_eof() {
        let input = "42441983\nMariela Lana\n";
        let table = entry().read_table(input.as_bytes(), Vec::new()).unwrap();

        assert!(table.is_empty());
        assert_eq!(table.column_count(), 5);
    }
}
