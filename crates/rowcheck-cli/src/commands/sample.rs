//! Sample command - validate the built-in demonstration dataset.

use rowcheck::sample_dataset;

use crate::cli::OutputArgs;

use super::report::validate_and_finish;

pub fn run(out: OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
    validate_and_finish(&sample_dataset(), &out)
}
