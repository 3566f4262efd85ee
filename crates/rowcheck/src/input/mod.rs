//! Input providers: file loaders, sample data and keyboard entry.

mod keyboard;
mod parser;
mod sample;
mod source;

pub use keyboard::KeyboardEntry;
pub use parser::{Parser, ParserConfig};
pub use sample::sample_dataset;
pub use source::{DataTable, RawValue, Record, SourceMetadata};
