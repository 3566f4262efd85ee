//! Enter command - type records at the keyboard.

use std::io;

use rowcheck::{KeyboardEntry, RuleConfig};

use crate::cli::OutputArgs;

use super::report::validate_and_finish;

pub fn run(out: OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
    let rules = match &out.rules {
        Some(path) => RuleConfig::load(path)?,
        None => RuleConfig::default(),
    };

    let entry = KeyboardEntry::new(&rules)?;
    let table = entry.read_table(io::stdin().lock(), io::stderr())?;

    validate_and_finish(&table, &out)
}
