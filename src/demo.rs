//! Commands shipped with the `cmdkit` binary

use std::sync::Arc;

use crate::application::{
    ApplicationError, ApplicationResult, CliApplicationBuilder, Command, CommandDefinition,
    IoResultExt,
};
use crate::domain::{
    ArgEnum, ArgType, ArgValue, ArgumentDescriptor, CommandDescriptor, DomainError, DomainResult,
};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::Console;

/// Add the demo commands to an application.
pub fn register(builder: CliApplicationBuilder) -> CliApplicationBuilder {
    builder
        .command::<GreetCommand>()
        .command::<EchoCommand>()
        .command::<StatusCommand>()
}

/// Greets someone, optionally loudly and more than once.
pub struct GreetCommand {
    console: Arc<dyn Console>,
    pub name: String,
    pub shout: bool,
    pub times: Option<i64>,
}

impl Command for GreetCommand {
    fn set_argument(&mut self, slot: &str, value: ArgValue) -> DomainResult<()> {
        match slot {
            "name" => self.name = value.extract(slot)?,
            "shout" => self.shout = value.extract(slot)?,
            "times" => self.times = value.extract(slot)?,
            _ => return Err(DomainError::unknown_slot(slot)),
        }
        Ok(())
    }

    fn execute(&mut self) -> ApplicationResult<()> {
        let times = self.times.unwrap_or(1);
        if times < 1 {
            return Err(ApplicationError::execution(
                "greet",
                format!("times must be positive, got {}", times),
            ));
        }

        let mut greeting = format!("Hello, {}!", self.name);
        if self.shout {
            greeting = greeting.to_uppercase();
        }
        for _ in 0..times {
            self.console.write_line(&greeting).with_context("write greeting")?;
        }
        Ok(())
    }
}

impl CommandDefinition for GreetCommand {
    fn descriptor() -> CommandDescriptor {
        CommandDescriptor::with_aliases(&["greet", "hello"], "Greets someone by name")
    }

    fn arguments() -> Vec<ArgumentDescriptor> {
        vec![
            ArgumentDescriptor::required("name", ArgType::String)
                .with_description("Who to greet")
                .with_example("Alice"),
            ArgumentDescriptor::optional("shout", ArgType::Boolean)
                .with_description("Greet in upper case"),
            ArgumentDescriptor::optional("times", ArgType::nullable(ArgType::Integer))
                .with_description("Repeat the greeting"),
        ]
    }

    fn create(services: &ServiceContainer) -> ApplicationResult<Self> {
        Ok(Self {
            console: services.console.clone(),
            name: String::new(),
            shout: false,
            times: None,
        })
    }
}

/// Prints a message, optionally prefixed with a counter.
pub struct EchoCommand {
    console: Arc<dyn Console>,
    pub message: String,
    pub count: i64,
}

impl Command for EchoCommand {
    fn set_argument(&mut self, slot: &str, value: ArgValue) -> DomainResult<()> {
        match slot {
            "message" => self.message = value.extract(slot)?,
            "count" => self.count = value.extract(slot)?,
            _ => return Err(DomainError::unknown_slot(slot)),
        }
        Ok(())
    }

    fn execute(&mut self) -> ApplicationResult<()> {
        for i in 1..=self.count {
            self.console
                .write_line(&format!("{}: {}", i, self.message))
                .with_context("write message")?;
        }
        Ok(())
    }
}

impl CommandDefinition for EchoCommand {
    fn descriptor() -> CommandDescriptor {
        CommandDescriptor::with_aliases(&["echo"], "Prints a message")
    }

    fn arguments() -> Vec<ArgumentDescriptor> {
        vec![
            ArgumentDescriptor::required("message", ArgType::String)
                .with_description("Text to print"),
            ArgumentDescriptor::optional("count", ArgType::Integer)
                .with_description("How often to print it")
                .with_default("1"),
        ]
    }

    fn create(services: &ServiceContainer) -> ApplicationResult<Self> {
        Ok(Self {
            console: services.console.clone(),
            message: String::new(),
            count: 0,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Running,
    Stopped,
}

impl ArgEnum for State {
    const MEMBERS: &'static [&'static str] = &["Idle", "Running", "Stopped"];

    fn from_member(member: &str) -> Option<Self> {
        match member {
            "Idle" => Some(State::Idle),
            "Running" => Some(State::Running),
            "Stopped" => Some(State::Stopped),
            _ => None,
        }
    }
}

/// Reports a service state given as an enum member.
pub struct StatusCommand {
    console: Arc<dyn Console>,
    pub state: State,
}

impl Command for StatusCommand {
    fn set_argument(&mut self, slot: &str, value: ArgValue) -> DomainResult<()> {
        match slot {
            "state" => self.state = value.into_enum(slot)?,
            _ => return Err(DomainError::unknown_slot(slot)),
        }
        Ok(())
    }

    fn execute(&mut self) -> ApplicationResult<()> {
        let line = match self.state {
            State::Idle => "service is idle",
            State::Running => "service is running",
            State::Stopped => "service is stopped",
        };
        self.console.write_line(line).with_context("write status")
    }
}

impl CommandDefinition for StatusCommand {
    fn descriptor() -> CommandDescriptor {
        CommandDescriptor::with_aliases(&["status", "st"], "Reports a service state")
    }

    fn arguments() -> Vec<ArgumentDescriptor> {
        vec![ArgumentDescriptor::required("state", State::arg_type())
            .with_description("Idle, Running or Stopped (any case)")]
    }

    fn create(services: &ServiceContainer) -> ApplicationResult<Self> {
        Ok(Self {
            console: services.console.clone(),
            state: State::Idle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::CliApplication;
    use crate::config::Settings;
    use crate::infrastructure::traits::MemoryConsole;

    fn run(line: &str) -> (ApplicationResult<()>, Vec<String>) {
        let console = Arc::new(MemoryConsole::default());
        let app = register(CliApplication::builder(Settings::default()).console(console.clone()))
            .build()
            .unwrap();
        let result = app.execute_line(line);
        (result, console.output())
    }

    #[test]
    fn given_shout_flag_when_greeting_then_upper_case() {
        let (result, output) = run("greet Alice --shout");

        assert!(result.is_ok());
        assert_eq!(output, vec!["HELLO, ALICE!"]);
    }

    #[test]
    fn given_times_when_greeting_then_repeated() {
        let (_, output) = run("hello --times=2 Bob");
        assert_eq!(output, vec!["Hello, Bob!", "Hello, Bob!"]);
    }

    #[test]
    fn given_zero_times_when_greeting_then_execution_error() {
        let (result, _) = run("greet Bob --times=0");
        assert!(matches!(result, Err(ApplicationError::Execution { .. })));
    }

    #[test]
    fn given_no_count_when_echoing_then_declared_default_used() {
        let (_, output) = run("echo \"hi there\"");
        assert_eq!(output, vec!["1: hi there"]);
    }

    #[test]
    fn given_member_in_other_case_when_status_then_canonical_member_bound() {
        let (_, output) = run("st RUNNING");
        assert_eq!(output, vec!["service is running"]);
    }
}
