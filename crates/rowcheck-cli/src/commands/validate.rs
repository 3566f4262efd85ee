//! Validate command - load a file and validate its records.

use std::path::PathBuf;

use colored::Colorize;
use tracing::debug;

use crate::cli::OutputArgs;

use super::report::{build_rowcheck, finish};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    out: OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let rowcheck = build_rowcheck(&out)?;
    let report = rowcheck.validate_file(&file)?;
    debug!(hash = %report.source.hash, "source loaded");

    println!(
        "{} {} ({}, {} rows)",
        "Validating".cyan().bold(),
        report.source.file.white(),
        report.source.format,
        report.source.row_count
    );

    if report.table.is_empty() {
        println!("{} No data to validate.", "Note:".yellow());
        return Ok(());
    }

    finish(&report.table, output, &out)
}
