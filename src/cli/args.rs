//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Command shell: runs one command from the arguments, or reads commands interactively
#[derive(Parser, Debug)]
#[command(name = "cmdkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file (overrides the global config)
    #[arg(short, long, env = "CMDKIT_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub print_config: bool,

    /// Print a commented config file template and exit
    #[arg(long, conflicts_with = "print_config")]
    pub print_template: bool,

    /// Command and its arguments; empty starts an interactive session
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_command_with_named_arguments_when_parsing_then_passed_through() {
        let cli = Cli::try_parse_from(["cmdkit", "-dd", "greet", "Alice", "--shout"]).unwrap();

        assert_eq!(cli.debug, 2);
        assert_eq!(cli.args, vec!["greet", "Alice", "--shout"]);
    }

    #[test]
    fn given_no_arguments_when_parsing_then_args_empty() {
        let cli = Cli::try_parse_from(["cmdkit"]).unwrap();

        assert!(cli.args.is_empty());
        assert!(!cli.print_config);
        assert!(!cli.print_template);
    }

    #[test]
    fn given_both_print_flags_when_parsing_then_rejected() {
        let result = Cli::try_parse_from(["cmdkit", "--print-config", "--print-template"]);
        assert!(result.is_err());
    }
}
