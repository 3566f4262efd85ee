//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use rowcheck::OutputFormat;
use std::path::PathBuf;

/// Rowcheck: validate patient registration records
#[derive(Parser)]
#[command(name = "rowcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Without a subcommand an interactive menu is shown
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a CSV/TSV or JSON file of records
    Validate {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Exact output path (default: next free name in --out-dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Validate the built-in five-record sample
    Sample {
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Type records at the keyboard, then validate them
    Enter {
        #[command(flatten)]
        out: OutputArgs,
    },
}

/// Options shared by every validating command.
#[derive(Args, Clone)]
pub struct OutputArgs {
    /// Directory for incrementally named output files
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Base name for output files (<base>_<n>.<ext>)
    #[arg(long, default_value = rowcheck::output::DEFAULT_OUTPUT_BASE)]
    pub base_name: String,

    /// Output format
    #[arg(short, long, default_value = "csv")]
    pub format: FormatChoice,

    /// JSON file overriding rule bounds and categories
    #[arg(long, value_name = "RULES_FILE")]
    pub rules: Option<PathBuf>,

    /// Only print the preview and summary
    #[arg(long)]
    pub no_save: bool,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json_summary: bool,
}

impl Default for OutputArgs {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            base_name: rowcheck::output::DEFAULT_OUTPUT_BASE.to_string(),
            format: FormatChoice::Csv,
            rules: None,
            no_save: false,
            json_summary: false,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatChoice {
    Csv,
    Json,
}

impl From<FormatChoice> for OutputFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Csv => OutputFormat::Csv,
            FormatChoice::Json => OutputFormat::Json,
        }
    }
}
