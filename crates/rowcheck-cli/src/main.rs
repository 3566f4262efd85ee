//! Rowcheck CLI - validate patient registration records.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Some(Commands::Validate { file, output, out }) => {
            commands::validate::run(file, output, out)
        }
        Some(Commands::Sample { out }) => commands::sample::run(out),
        Some(Commands::Enter { out }) => commands::enter::run(out),
        None => commands::menu::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
