//! CLI command implementations.

pub mod enter;
pub mod menu;
pub mod report;
pub mod sample;
pub mod validate;
