//! Command contract and static command declarations
//!
//! A command type declares its names and argument slots once, via
//! [`CommandDefinition`], and is registered as a [`CommandType`]. Instances are
//! produced per invocation by the type's factory, filled through
//! [`Command::set_argument`] and executed once.

use std::fmt;
use std::sync::Arc;

use crate::application::ApplicationResult;
use crate::domain::{ArgValue, ArgumentDescriptor, CommandDescriptor, DomainResult};
use crate::infrastructure::di::ServiceContainer;

/// An executable command instance.
pub trait Command: Send {
    /// Write a coerced value into the slot with the given name.
    fn set_argument(&mut self, slot: &str, value: ArgValue) -> DomainResult<()>;

    /// Run the command.
    fn execute(&mut self) -> ApplicationResult<()>;
}

/// Static declaration of a command type.
pub trait CommandDefinition: Command + Sized + 'static {
    fn descriptor() -> CommandDescriptor;

    /// Argument slots in declaration order.
    fn arguments() -> Vec<ArgumentDescriptor> {
        Vec::new()
    }

    /// Construct an instance, taking its dependencies from `services`.
    fn create(services: &ServiceContainer) -> ApplicationResult<Self>;
}

/// Produces a fresh command instance per invocation.
pub type CommandFactory =
    Arc<dyn Fn(&ServiceContainer) -> ApplicationResult<Box<dyn Command>> + Send + Sync>;

/// Registration metadata of a command type.
///
/// Built from a [`CommandDefinition`] with [`CommandType::of`], or assembled
/// at runtime with [`CommandType::dynamic`] for commands without a Rust type
/// of their own. Missing pieces are rejected at registration.
#[derive(Clone)]
pub struct CommandType {
    pub(crate) type_name: String,
    pub(crate) descriptor: Option<CommandDescriptor>,
    pub(crate) arguments: Vec<ArgumentDescriptor>,
    pub(crate) factory: Option<CommandFactory>,
}

impl CommandType {
    pub fn of<C: CommandDefinition>() -> Self {
        Self {
            type_name: std::any::type_name::<C>().to_string(),
            descriptor: Some(C::descriptor()),
            arguments: C::arguments(),
            factory: Some(Arc::new(
                |services: &ServiceContainer| -> ApplicationResult<Box<dyn Command>> {
                    Ok(Box::new(C::create(services)?))
                },
            )),
        }
    }

    pub fn dynamic(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            descriptor: None,
            arguments: Vec::new(),
            factory: None,
        }
    }

    pub fn with_descriptor(mut self, descriptor: CommandDescriptor) -> Self {
        self.descriptor = Some(descriptor);
        self
    }

    pub fn with_argument(mut self, argument: ArgumentDescriptor) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&ServiceContainer) -> ApplicationResult<Box<dyn Command>> + Send + Sync + 'static,
    {
        self.factory = Some(Arc::new(factory));
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn descriptor(&self) -> Option<&CommandDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn arguments(&self) -> &[ArgumentDescriptor] {
        &self.arguments
    }
}

impl fmt::Debug for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandType")
            .field("type_name", &self.type_name)
            .field("descriptor", &self.descriptor)
            .field("arguments", &self.arguments)
            .field("invocable", &self.factory.is_some())
            .finish()
    }
}
