//! Output consumers: file writers and terminal preview.

mod preview;
mod writer;

pub use preview::{render_preview, DEFAULT_PREVIEW_ROWS};
pub use writer::{
    next_output_path, save, save_incremental, write_csv, write_json, OutputFormat,
    DEFAULT_OUTPUT_BASE,
};
