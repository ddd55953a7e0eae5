//! Command registry: case-insensitive lookup from alias to command type
//!
//! Each registered type carries its argument schema, derived on first use and
//! cached for the lifetime of the registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use itertools::Itertools;
use tracing::{debug, instrument, trace};

use crate::application::command::{Command, CommandFactory, CommandType};
use crate::application::ApplicationResult;
use crate::domain::{ArgumentDescriptor, ArgumentSchema, CommandDescriptor, DomainError, DomainResult};
use crate::infrastructure::di::ServiceContainer;

/// A command type accepted by the registry.
pub struct RegisteredCommand {
    type_name: String,
    descriptor: CommandDescriptor,
    arguments: Vec<ArgumentDescriptor>,
    factory: CommandFactory,
    schema: OnceLock<Arc<ArgumentSchema>>,
}

impl RegisteredCommand {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn descriptor(&self) -> &CommandDescriptor {
        &self.descriptor
    }

    /// Argument schema, derived on first access.
    pub fn schema(&self) -> Arc<ArgumentSchema> {
        self.schema
            .get_or_init(|| {
                debug!("deriving argument schema for {}", self.type_name);
                Arc::new(ArgumentSchema::derive(self.arguments.clone()))
            })
            .clone()
    }

    /// Fresh instance with its dependencies taken from `services`.
    pub fn instantiate(&self, services: &ServiceContainer) -> ApplicationResult<Box<dyn Command>> {
        (self.factory)(services)
    }
}

impl fmt::Debug for RegisteredCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredCommand")
            .field("type_name", &self.type_name)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Lookup table from lower-cased alias to registered command type.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    by_alias: HashMap<String, Arc<RegisteredCommand>>,
    /// Aliases in insertion order
    aliases: Vec<String>,
    by_type: HashMap<String, Arc<RegisteredCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command type under all of its aliases.
    ///
    /// Rejects types without descriptor or factory, blank aliases and invalid
    /// argument slots with [`DomainError::Schema`], and aliases already taken
    /// by another type with [`DomainError::DuplicateName`]. A rejected
    /// registration leaves the registry unchanged. Registering the same type
    /// again is a no-op when its metadata is unchanged, otherwise a
    /// [`DomainError::Schema`].
    #[instrument(level = "debug", skip(self, command_type), fields(type_name = %command_type.type_name()))]
    pub fn register(&mut self, command_type: CommandType) -> DomainResult<()> {
        let CommandType {
            type_name,
            descriptor,
            arguments,
            factory,
        } = command_type;

        let descriptor = descriptor
            .ok_or_else(|| DomainError::schema(&type_name, "carries no command metadata"))?;
        let factory =
            factory.ok_or_else(|| DomainError::schema(&type_name, "is not invocable (no factory)"))?;
        if descriptor.names.is_empty() {
            return Err(DomainError::schema(&type_name, "declares no command name"));
        }
        if descriptor.names.iter().any(|name| name.trim().is_empty()) {
            return Err(DomainError::schema(
                &type_name,
                "command names must be non-empty",
            ));
        }
        ArgumentSchema::validate(&type_name, &arguments)?;

        let aliases: Vec<String> = descriptor
            .names
            .iter()
            .map(|name| name.to_lowercase())
            .unique()
            .collect();
        for alias in &aliases {
            if let Some(existing) = self.by_alias.get(alias) {
                if existing.type_name != type_name {
                    return Err(DomainError::DuplicateName {
                        alias: alias.clone(),
                        existing: existing.type_name.clone(),
                        attempted: type_name,
                    });
                }
            }
        }

        if let Some(existing) = self.by_type.get(&type_name) {
            if existing.descriptor != descriptor || existing.arguments != arguments {
                return Err(DomainError::schema(
                    &type_name,
                    "already registered with different names or arguments",
                ));
            }
            trace!("{} already registered", type_name);
            return Ok(());
        }

        let entry = Arc::new(RegisteredCommand {
            type_name: type_name.clone(),
            descriptor,
            arguments,
            factory,
            schema: OnceLock::new(),
        });
        for alias in aliases {
            debug!("registered '{}' -> {}", alias, type_name);
            self.by_alias.insert(alias.clone(), entry.clone());
            self.aliases.push(alias);
        }
        self.by_type.insert(type_name, entry);

        Ok(())
    }

    /// Case-insensitive lookup.
    pub fn resolve(&self, name: &str) -> DomainResult<Arc<RegisteredCommand>> {
        self.by_alias
            .get(&name.to_lowercase())
            .cloned()
            .ok_or_else(|| DomainError::UnknownCommand {
                name: name.to_string(),
            })
    }

    /// Every registered type, once per alias, in registration order.
    ///
    /// Types registered under several aliases appear several times; use
    /// [`unique_commands`](Self::unique_commands) for one entry per type.
    pub fn list_all(&self) -> Vec<Arc<RegisteredCommand>> {
        self.aliases
            .iter()
            .filter_map(|alias| self.by_alias.get(alias).cloned())
            .collect()
    }

    /// Registered types without duplicates, in registration order.
    pub fn unique_commands(&self) -> Vec<Arc<RegisteredCommand>> {
        self.list_all()
            .into_iter()
            .unique_by(|entry| entry.type_name.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}
