//! Interactive menu shown when no subcommand is given.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::cli::OutputArgs;

/// What the operator picked.
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Keyboard,
    Sample,
}

fn parse_choice(input: &str) -> Option<Choice> {
    match input.trim() {
        "1" => Some(Choice::Keyboard),
        "2" => Some(Choice::Sample),
        _ => None,
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "=== Rowcheck record validator ===".cyan().bold());
    println!("1) Keyboard entry");
    println!("2) Use the sample dataset");
    print!("Choose an option [1/2]: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    match parse_choice(&line) {
        Some(Choice::Keyboard) => super::enter::run(OutputArgs::default()),
        Some(Choice::Sample) => super::sample::run(OutputArgs::default()),
        None => {
            println!("Invalid option. Exiting.");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1\n"), Some(Choice::Keyboard));
        assert_eq!(parse_choice(" 2 "), Some(Choice::Sample));
        assert_eq!(parse_choice("3"), None);
        assert_eq!(parse_choice(""), None);
    }
}
