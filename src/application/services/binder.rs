//! Argument binding: matches tokens to declared slots and writes coerced values
//!
//! Required slots are resolved before optional ones, each in declaration
//! order. A slot takes its named token if one was given, otherwise the next
//! positional token. A required slot may therefore take a positional token
//! the user meant for an earlier optional slot. An absent nullable slot
//! without a default is set to no value.

use tracing::{debug, instrument, trace};

use crate::application::command::Command;
use crate::domain::{
    coerce, ArgValue, ArgumentDescriptor, ArgumentSchema, DomainError, DomainResult, TokenSet,
};

/// Binds the tokens of one invocation to a command instance.
pub struct ArgumentBinder<'a> {
    command_name: &'a str,
    schema: &'a ArgumentSchema,
}

impl<'a> ArgumentBinder<'a> {
    /// `command_name` is used in error messages.
    pub fn new(command_name: &'a str, schema: &'a ArgumentSchema) -> Self {
        Self {
            command_name,
            schema,
        }
    }

    /// Fill `command` from `tokens` (the input without the command name).
    ///
    /// The first missing required argument or failed coercion aborts the bind
    /// and drops the instance.
    #[instrument(level = "debug", skip_all, fields(command = self.command_name))]
    pub fn bind<S: AsRef<str>>(
        &self,
        mut command: Box<dyn Command>,
        tokens: &[S],
    ) -> DomainResult<Box<dyn Command>> {
        let mut tokens = TokenSet::classify(tokens);

        for slot in self.schema.required() {
            let raw = tokens
                .take(&slot.name)
                .ok_or_else(|| DomainError::MissingArgument {
                    slot: slot.name.clone(),
                    command: self.command_name.to_string(),
                })?;
            self.assign(command.as_mut(), slot, &raw)?;
        }

        for slot in self.schema.optional() {
            match tokens.take(&slot.name) {
                Some(raw) => self.assign(command.as_mut(), slot, &raw)?,
                None => match &slot.default_value {
                    Some(default) => self.assign(command.as_mut(), slot, default)?,
                    None if slot.arg_type.is_nullable() => {
                        trace!("{} = no value", slot.name);
                        command.set_argument(&slot.name, ArgValue::Null)?;
                    }
                    None => trace!("optional slot '{}' left unset", slot.name),
                },
            }
        }

        if !tokens.is_empty() {
            debug!(
                "ignoring unmatched tokens: positional={:?} named={:?}",
                tokens.positional().collect::<Vec<_>>(),
                tokens.named_names().collect::<Vec<_>>()
            );
        }

        Ok(command)
    }

    fn assign(&self, command: &mut dyn Command, slot: &ArgumentDescriptor, raw: &str) -> DomainResult<()> {
        let value = coerce(raw, slot, self.command_name)?;
        trace!("{} = {:?}", slot.name, value);
        command.set_argument(&slot.name, value)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ApplicationResult;
    use crate::domain::ArgType;

    type Writes = Arc<Mutex<Vec<(String, ArgValue)>>>;

    /// Records every write so tests can inspect binding order and values.
    struct Recorder(Writes);

    impl Command for Recorder {
        fn set_argument(&mut self, slot: &str, value: ArgValue) -> DomainResult<()> {
            self.0.lock().unwrap().push((slot.to_string(), value));
            Ok(())
        }

        fn execute(&mut self) -> ApplicationResult<()> {
            Ok(())
        }
    }

    fn bind(schema: &ArgumentSchema, tokens: &[&str]) -> DomainResult<Vec<(String, ArgValue)>> {
        let writes = Writes::default();
        ArgumentBinder::new("cmd", schema).bind(Box::new(Recorder(writes.clone())), tokens)?;
        let recorded = writes.lock().unwrap().clone();
        Ok(recorded)
    }

    #[test]
    fn given_optional_declared_before_required_when_single_positional_then_required_takes_it() {
        let schema = ArgumentSchema::derive(vec![
            ArgumentDescriptor::optional("label", ArgType::String),
            ArgumentDescriptor::required("path", ArgType::String),
        ]);

        let writes = bind(&schema, &["file.txt"]).unwrap();

        assert_eq!(writes, vec![("path".into(), ArgValue::String("file.txt".into()))]);
    }

    #[test]
    fn given_two_positionals_when_binding_then_required_first_then_optional() {
        let schema = ArgumentSchema::derive(vec![
            ArgumentDescriptor::optional("label", ArgType::String),
            ArgumentDescriptor::required("path", ArgType::String),
        ]);

        let writes = bind(&schema, &["one", "two"]).unwrap();

        assert_eq!(
            writes,
            vec![
                ("path".into(), ArgValue::String("one".into())),
                ("label".into(), ArgValue::String("two".into())),
            ]
        );
    }

    #[test]
    fn given_default_declared_when_optional_absent_then_default_written() {
        let schema = ArgumentSchema::derive(vec![
            ArgumentDescriptor::optional("retries", ArgType::Integer).with_default("3"),
        ]);

        let writes = bind(&schema, &[]).unwrap();

        assert_eq!(writes, vec![("retries".into(), ArgValue::Integer(3))]);
    }

    #[test]
    fn given_absent_nullable_optional_when_binding_then_no_value_written() {
        let schema = ArgumentSchema::derive(vec![ArgumentDescriptor::optional(
            "n",
            ArgType::nullable(ArgType::Integer),
        )]);

        let writes = bind(&schema, &[]).unwrap();

        assert_eq!(writes, vec![("n".into(), ArgValue::Null)]);
    }

    #[test]
    fn given_absent_plain_optional_when_binding_then_slot_untouched() {
        let schema = ArgumentSchema::derive(vec![ArgumentDescriptor::optional("n", ArgType::Integer)]);

        let writes = bind(&schema, &[]).unwrap();

        assert!(writes.is_empty());
    }

    #[test]
    fn given_coercion_failure_when_binding_then_format_error_names_slot() {
        let schema = ArgumentSchema::derive(vec![
            ArgumentDescriptor::required("count", ArgType::Integer),
            ArgumentDescriptor::required("name", ArgType::String),
        ]);

        let err = bind(&schema, &["orange", "bob"]).unwrap_err();

        assert!(matches!(err, DomainError::Format { ref slot, .. } if slot == "count"));
    }

    #[test]
    fn given_unknown_named_token_when_binding_then_ignored() {
        let schema = ArgumentSchema::derive(vec![ArgumentDescriptor::optional("verbose", ArgType::Boolean)]);

        let writes = bind(&schema, &["--colour=red"]).unwrap();

        assert!(writes.is_empty());
    }
}
