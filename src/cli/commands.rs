//! Entry point of the `cmdkit` binary: settings, application and dispatch

use tracing::{debug, instrument};

use crate::application::{CliApplication, CliApplicationBuilder};
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;

/// Application name: config directory and env var prefix.
pub const APP_NAME: &str = "cmdkit";

/// Load settings, build the application with the commands added by
/// `register`, and run the trailing arguments (or an interactive session).
#[instrument(level = "debug", skip(register))]
pub fn execute<F>(cli: &Cli, register: F) -> CliResult<()>
where
    F: FnOnce(CliApplicationBuilder) -> CliApplicationBuilder,
{
    if cli.print_template {
        if !cli.args.is_empty() {
            return Err(CliError::InvalidArgs(
                "--print-template does not take a command".into(),
            ));
        }
        output::info(&Settings::template(APP_NAME));
        return Ok(());
    }

    let settings = Settings::load(APP_NAME, cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    if cli.print_config {
        return print_config(cli, &settings);
    }

    let app = register(CliApplication::builder(settings)).build()?;
    app.run(cli.args.as_slice())?;
    Ok(())
}

fn print_config(cli: &Cli, settings: &Settings) -> CliResult<()> {
    if !cli.args.is_empty() {
        return Err(CliError::InvalidArgs(
            "--print-config does not take a command".into(),
        ));
    }
    output::info(&settings.to_toml()?);
    Ok(())
}
