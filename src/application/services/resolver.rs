//! Command resolution: raw input to a bound, executable command

use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::command::Command;
use crate::application::services::binder::ArgumentBinder;
use crate::application::services::registry::CommandRegistry;
use crate::application::ApplicationResult;
use crate::domain::{tokenize, CommandDescriptor, DomainError};
use crate::infrastructure::di::ServiceContainer;

/// A command instance with all arguments bound, ready to run once.
pub struct ResolvedCommand {
    /// Name as typed by the user
    pub name: String,
    pub descriptor: CommandDescriptor,
    command: Box<dyn Command>,
}

impl ResolvedCommand {
    pub fn execute(mut self) -> ApplicationResult<()> {
        debug!("executing '{}'", self.descriptor.primary_name());
        self.command.execute()
    }
}

impl fmt::Debug for ResolvedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCommand")
            .field("name", &self.name)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Turns an input line or argv into a bound command instance.
pub struct CommandResolver {
    registry: Arc<CommandRegistry>,
    services: Arc<ServiceContainer>,
}

impl CommandResolver {
    pub fn new(registry: Arc<CommandRegistry>, services: Arc<ServiceContainer>) -> Self {
        Self { registry, services }
    }

    /// Tokenize `line` and resolve it; the first token names the command.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve_from_line(&self, line: &str) -> ApplicationResult<ResolvedCommand> {
        let tokens = tokenize(line);
        self.resolve_from_argv(tokens.as_slice())
    }

    /// Resolve already split input; the first element names the command.
    pub fn resolve_from_argv<S: AsRef<str>>(&self, argv: &[S]) -> ApplicationResult<ResolvedCommand> {
        let (name, args) = argv.split_first().ok_or_else(|| DomainError::UnknownCommand {
            name: String::new(),
        })?;
        let name = name.as_ref();

        let entry = self.registry.resolve(name)?;
        let descriptor = entry.descriptor();
        debug!("'{}' resolved to {}", name, entry.type_name());

        let schema = entry.schema();
        let instance = entry.instantiate(&self.services)?;
        let command = ArgumentBinder::new(descriptor.primary_name(), &schema).bind(instance, args)?;

        Ok(ResolvedCommand {
            name: name.to_string(),
            descriptor: descriptor.clone(),
            command,
        })
    }
}
