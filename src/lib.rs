//! Command-line application framework: commands declare their names and typed
//! argument slots once; input lines or argv are tokenized, resolved to a
//! registered command, bound and executed.

pub mod application;
pub mod cli;
pub mod config;
pub mod demo;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{
    CliApplication, CliApplicationBuilder, Command, CommandDefinition, CommandType,
};
pub use config::Settings;
pub use domain::{ArgType, ArgValue, ArgumentDescriptor, CommandDescriptor, DomainError};
