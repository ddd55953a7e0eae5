//! Commands every application gets

use std::sync::Arc;

use crate::application::command::{Command, CommandDefinition};
use crate::application::error_ext::IoResultExt;
use crate::application::services::{CommandRegistry, RegisteredCommand};
use crate::application::ApplicationResult;
use crate::domain::{
    ArgType, ArgValue, ArgumentDescriptor, CommandDescriptor, DomainError, DomainResult,
};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::Console;

/// Lists the registered commands, or describes one of them.
pub struct HelpCommand {
    registry: Arc<CommandRegistry>,
    console: Arc<dyn Console>,
    command_name: Option<String>,
}

impl Command for HelpCommand {
    fn set_argument(&mut self, slot: &str, value: ArgValue) -> DomainResult<()> {
        match slot {
            "c" => self.command_name = value.extract(slot)?,
            _ => return Err(DomainError::unknown_slot(slot)),
        }
        Ok(())
    }

    fn execute(&mut self) -> ApplicationResult<()> {
        let lines = match self.command_name.as_deref().map(str::trim) {
            None | Some("") => self.overview(),
            Some(name) => match self.registry.resolve(name) {
                Ok(entry) => describe(&entry),
                Err(_) => vec![format!("Unknown command: '{}'", name)],
            },
        };

        for line in lines {
            self.console.write_line(&line).with_context("write help")?;
        }
        Ok(())
    }
}

impl CommandDefinition for HelpCommand {
    fn descriptor() -> CommandDescriptor {
        CommandDescriptor::with_aliases(
            &["help", "h"],
            "Displays help information for available commands",
        )
    }

    fn arguments() -> Vec<ArgumentDescriptor> {
        vec![
            ArgumentDescriptor::optional("c", ArgType::nullable(ArgType::String))
                .with_description("Name of command to display help about")
                .with_example("help"),
        ]
    }

    fn create(services: &ServiceContainer) -> ApplicationResult<Self> {
        Ok(Self {
            registry: services.require::<CommandRegistry>()?,
            console: services.console.clone(),
            command_name: None,
        })
    }
}

impl HelpCommand {
    fn overview(&self) -> Vec<String> {
        let mut lines = vec!["Available commands:".to_string()];
        lines.extend(self.registry.unique_commands().iter().map(|entry| {
            let descriptor = entry.descriptor();
            format!("{}: {}", descriptor.names.join(", "), descriptor.description)
        }));
        lines
    }
}

/// Detailed help for one command: names, arguments and an example invocation.
fn describe(entry: &RegisteredCommand) -> Vec<String> {
    let descriptor = entry.descriptor();
    let schema = entry.schema();
    let mut lines = vec![
        format!("{}: {}", descriptor.names.join(", "), descriptor.description),
        String::new(),
    ];

    if schema.is_empty() {
        return lines;
    }

    lines.push("  Arguments:".to_string());
    for slot in schema.slots() {
        let requiredness = if slot.required { "required" } else { "optional" };
        let description = if slot.description.trim().is_empty() {
            String::new()
        } else {
            format!(" | {}", slot.description)
        };
        lines.push(format!(
            "    --{} ({}): {}{}",
            slot.name, requiredness, slot.arg_type, description
        ));
    }

    let usage = std::iter::once(descriptor.primary_name().to_string())
        .chain(schema.slots().iter().map(|slot| {
            if slot.required {
                slot.example_value()
            } else {
                format!("[--{}={}]", slot.name, slot.example_value())
            }
        }))
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(String::new());
    lines.push(format!("Example usage: {}", usage));

    lines
}
