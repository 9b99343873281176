//! Command-line interface and result reporting.

pub mod commands;
pub mod output;
pub mod report;
pub mod types;

pub use output::{output, CommandOutput};
pub use types::Cli;
