//! CLI layer: argument parsing and application startup

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::Cli;
pub use commands::execute;
pub use error::{CliError, CliResult};
