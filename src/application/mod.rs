//! Application layer: command contract, resolution services and the shell
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod builtin;
pub mod command;
pub mod error;
pub mod error_ext;
pub mod services;
pub mod shell;

pub use builtin::HelpCommand;
pub use command::{Command, CommandDefinition, CommandFactory, CommandType};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use shell::{CliApplication, CliApplicationBuilder};
