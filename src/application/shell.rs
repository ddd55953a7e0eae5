//! Application shell: single-shot and interactive command execution

use std::any::Any;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::builtin::HelpCommand;
use crate::application::command::{CommandDefinition, CommandType};
use crate::application::error_ext::IoResultExt;
use crate::application::services::{CommandRegistry, CommandResolver};
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::DomainError;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::Console;

/// Collects services and command types, then builds a [`CliApplication`].
pub struct CliApplicationBuilder {
    services: ServiceContainer,
    commands: Vec<CommandType>,
}

impl CliApplicationBuilder {
    /// Replace the terminal used by the shell and by commands.
    pub fn console(mut self, console: Arc<dyn Console>) -> Self {
        self.services.console = console;
        self
    }

    /// Make a shared service available to command factories.
    pub fn service<T: Any + Send + Sync>(mut self, service: Arc<T>) -> Self {
        self.services.insert(service);
        self
    }

    pub fn command<C: CommandDefinition>(self) -> Self {
        self.command_type(CommandType::of::<C>())
    }

    pub fn command_type(mut self, command_type: CommandType) -> Self {
        self.commands.push(command_type);
        self
    }

    /// Register the built-in `help` command and all collected commands.
    ///
    /// The first invalid or conflicting command aborts the build.
    pub fn build(self) -> ApplicationResult<CliApplication> {
        let Self {
            mut services,
            commands,
        } = self;

        let mut registry = CommandRegistry::new();
        registry.register(CommandType::of::<HelpCommand>())?;
        for command_type in commands {
            registry.register(command_type)?;
        }

        let registry = Arc::new(registry);
        services.insert(registry.clone());
        let services = Arc::new(services);

        Ok(CliApplication {
            console: services.console.clone(),
            settings: services.settings.clone(),
            resolver: CommandResolver::new(registry, services),
        })
    }
}

/// A command-line application: runs one command from argv, or an
/// interactive session reading commands line by line.
pub struct CliApplication {
    resolver: CommandResolver,
    console: Arc<dyn Console>,
    settings: Arc<Settings>,
}

impl CliApplication {
    pub fn builder(settings: Settings) -> CliApplicationBuilder {
        CliApplicationBuilder {
            services: ServiceContainer::new(settings),
            commands: Vec::new(),
        }
    }

    pub fn resolver(&self) -> &CommandResolver {
        &self.resolver
    }

    /// Run `args` as a single command, or start an interactive session when
    /// `args` is empty. Single-shot errors are returned to the caller.
    pub fn run<S: AsRef<str>>(&self, args: &[S]) -> ApplicationResult<()> {
        if args.is_empty() {
            self.run_interactive()
        } else {
            self.execute_argv(args)
        }
    }

    pub fn execute_argv<S: AsRef<str>>(&self, args: &[S]) -> ApplicationResult<()> {
        self.resolver.resolve_from_argv(args)?.execute()
    }

    pub fn execute_line(&self, line: &str) -> ApplicationResult<()> {
        self.resolver.resolve_from_line(line)?.execute()
    }

    /// Read and execute lines until end of input.
    ///
    /// Resolution and execution errors are printed and the session continues;
    /// only console failures end it early.
    #[instrument(level = "debug", skip(self))]
    pub fn run_interactive(&self) -> ApplicationResult<()> {
        self.console
            .write_line(&self.settings.welcome)
            .with_context("write welcome message")?;

        while let Some(line) = self
            .console
            .read_line(&self.settings.prompt)
            .with_context("read input")?
        {
            if line.trim().is_empty() {
                continue;
            }
            if let Err(e) = self.execute_line(&line) {
                debug!("command failed: {:?}", e);
                self.console
                    .write_error(&user_message(&e))
                    .with_context("write error")?;
            }
        }

        info!("end of input, leaving interactive session");
        Ok(())
    }
}

/// Message shown to the user for a failed line in an interactive session.
fn user_message(error: &ApplicationError) -> String {
    match error.as_domain() {
        Some(DomainError::UnknownCommand { name }) => format!(
            "Command '{}' not found. Type 'help' for a list of available commands.",
            name
        ),
        _ => error.to_string(),
    }
}
