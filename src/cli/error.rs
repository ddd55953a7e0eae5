//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Domain(d) => match d {
                    DomainError::UnknownCommand { .. } | DomainError::MissingArgument { .. } => {
                        crate::exitcode::USAGE
                    }
                    DomainError::Format { .. } => crate::exitcode::DATAERR,
                    DomainError::Schema { .. }
                    | DomainError::DuplicateName { .. }
                    | DomainError::SlotMismatch { .. } => crate::exitcode::SOFTWARE,
                },
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                ApplicationError::MissingService { .. } | ApplicationError::Execution { .. } => {
                    crate::exitcode::SOFTWARE
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DomainError::UnknownCommand { name: "x".into() }, crate::exitcode::USAGE)]
    #[case(DomainError::MissingArgument { slot: "a".into(), command: "b".into() }, crate::exitcode::USAGE)]
    #[case(
        DomainError::Format { slot: "a".into(), command: "b".into(), value: "c".into(), expected: "Integer".into() },
        crate::exitcode::DATAERR
    )]
    #[case(DomainError::schema("T", "bad"), crate::exitcode::SOFTWARE)]
    fn test_exit_code_for_domain_errors(#[case] error: DomainError, #[case] expected: i32) {
        let err = CliError::from(ApplicationError::from(error));
        assert_eq!(err.exit_code(), expected);
    }

    #[test]
    fn given_config_error_when_mapping_then_config_exit_code() {
        let err = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });
        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }
}
