//! Shared tail of every validating command: preview, summary, save.

use std::path::PathBuf;

use colored::Colorize;
use rowcheck::output::{render_preview, save, save_incremental, DEFAULT_PREVIEW_ROWS};
use rowcheck::{DataTable, OutputFormat, Rowcheck, RowcheckConfig, RuleConfig, ValidatedTable};

use crate::cli::OutputArgs;

/// Build the validator, loading rule overrides when given.
pub fn build_rowcheck(out: &OutputArgs) -> Result<Rowcheck, Box<dyn std::error::Error>> {
    let rules = match &out.rules {
        Some(path) => RuleConfig::load(path)?,
        None => RuleConfig::default(),
    };
    Ok(Rowcheck::with_config(RowcheckConfig {
        rules,
        ..RowcheckConfig::default()
    })?)
}

/// Validate an in-memory table and hand it to [`finish`].
pub fn validate_and_finish(
    table: &DataTable,
    out: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if table.is_empty() {
        println!("{} No data to validate.", "Note:".yellow());
        return Ok(());
    }

    let rowcheck = build_rowcheck(out)?;
    let validated = rowcheck.validate_table(table)?;
    finish(&validated, None, out)
}

/// Print the preview and summary, then write the output file.
pub fn finish(
    table: &ValidatedTable,
    output: Option<PathBuf>,
    out: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("{}", "Preview (first rows)".cyan().bold());
    print!("{}", render_preview(table, DEFAULT_PREVIEW_ROWS));
    if table.row_count() > DEFAULT_PREVIEW_ROWS {
        println!("... {} more rows", table.row_count() - DEFAULT_PREVIEW_ROWS);
    }

    let summary = table.summary();
    println!();
    if out.json_summary {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} {} rows: {} valid ({:.0}%), {} invalid",
            "Validated".cyan().bold(),
            summary.total_rows.to_string().white().bold(),
            summary.valid_rows.to_string().green(),
            summary.valid_ratio() * 100.0,
            summary.invalid_rows.to_string().red(),
        );
        for (reason, count) in &summary.reason_counts {
            println!("  {:>4}  {}", count, reason);
        }
    }

    if out.no_save {
        return Ok(());
    }

    let format: OutputFormat = out.format.into();
    let path = match output {
        Some(path) => {
            save(table, &path, format)?;
            path
        }
        None => save_incremental(table, &out.out_dir, &out.base_name, format)?,
    };

    let shown = path.canonicalize().unwrap_or(path);
    println!();
    println!(
        "{} {}",
        "Output written:".green().bold(),
        shown.display().to_string().cyan()
    );

    Ok(())
}
