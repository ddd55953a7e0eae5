//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent schema violations and user input that cannot be bound.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A command type is malformed; raised at registration time.
    #[error("invalid command type {type_name}: {reason}")]
    Schema { type_name: String, reason: String },

    #[error("command name '{alias}' of {attempted} is already registered by {existing}")]
    DuplicateName {
        alias: String,
        existing: String,
        attempted: String,
    },

    #[error("unknown command '{name}'")]
    UnknownCommand { name: String },

    #[error("missing required argument '{slot}' for command '{command}'")]
    MissingArgument { slot: String, command: String },

    #[error("invalid value '{value}' for argument '{slot}' of command '{command}': expected {expected}")]
    Format {
        slot: String,
        command: String,
        value: String,
        expected: String,
    },

    /// A command setter received an undeclared slot or a value of the wrong shape.
    #[error("argument slot '{slot}': {reason}")]
    SlotMismatch { slot: String, reason: String },
}

impl DomainError {
    pub fn schema(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Error for a setter that was handed a slot name it does not declare.
    pub fn unknown_slot(slot: impl Into<String>) -> Self {
        Self::SlotMismatch {
            slot: slot.into(),
            reason: "not declared by this command".into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
