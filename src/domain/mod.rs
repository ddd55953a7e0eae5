//! Domain layer: command metadata, tokens and argument values
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod schema;
pub mod token_set;
pub mod tokenizer;
pub mod value;

pub use entities::{ArgType, ArgumentDescriptor, CommandDescriptor};
pub use error::{DomainError, DomainResult};
pub use schema::ArgumentSchema;
pub use token_set::TokenSet;
pub use tokenizer::tokenize;
pub use value::{coerce, ArgEnum, ArgValue, FromArgValue};
