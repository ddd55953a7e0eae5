//! Argument schema: declared slots partitioned into required and optional

use std::collections::HashSet;

use crate::domain::{coerce, ArgumentDescriptor, DomainError, DomainResult};

/// Declared argument slots of one command type.
///
/// Both partitions keep declaration order, which is the only ordering signal
/// for positional matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSchema {
    slots: Vec<ArgumentDescriptor>,
    required: Vec<usize>,
    optional: Vec<usize>,
}

impl ArgumentSchema {
    /// Stable partition of the declared slots.
    pub fn derive(slots: Vec<ArgumentDescriptor>) -> Self {
        let (required, optional): (Vec<usize>, Vec<usize>) =
            (0..slots.len()).partition(|&i| slots[i].required);
        Self {
            slots,
            required,
            optional,
        }
    }

    /// Check the slot invariants of a command type before it is registered.
    ///
    /// Slot names must be non-empty, free of whitespace and `=`, and unique.
    /// Declared defaults must coerce to the slot type.
    pub fn validate(type_name: &str, slots: &[ArgumentDescriptor]) -> DomainResult<()> {
        let mut seen = HashSet::new();
        for slot in slots {
            let name = slot.name.as_str();
            if name.trim().is_empty() {
                return Err(DomainError::schema(type_name, "argument slot with empty name"));
            }
            if name.contains(|c: char| c.is_whitespace() || c == '=') {
                return Err(DomainError::schema(
                    type_name,
                    format!("argument slot name '{}' contains whitespace or '='", name),
                ));
            }
            if !seen.insert(name) {
                return Err(DomainError::schema(
                    type_name,
                    format!("argument slot '{}' declared twice", name),
                ));
            }
            if let Some(default) = &slot.default_value {
                coerce(default, slot, type_name).map_err(|e| {
                    DomainError::schema(type_name, format!("default of slot '{}': {}", name, e))
                })?;
            }
        }
        Ok(())
    }

    /// All slots in declaration order.
    pub fn slots(&self) -> &[ArgumentDescriptor] {
        &self.slots
    }

    pub fn required(&self) -> impl Iterator<Item = &ArgumentDescriptor> {
        self.required.iter().map(|&i| &self.slots[i])
    }

    pub fn optional(&self) -> impl Iterator<Item = &ArgumentDescriptor> {
        self.optional.iter().map(|&i| &self.slots[i])
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArgType;

    fn names<'a>(slots: impl Iterator<Item = &'a ArgumentDescriptor>) -> Vec<&'a str> {
        slots.map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn given_interleaved_slots_when_deriving_then_partitions_keep_declaration_order() {
        let schema = ArgumentSchema::derive(vec![
            ArgumentDescriptor::optional("a", ArgType::String),
            ArgumentDescriptor::required("b", ArgType::String),
            ArgumentDescriptor::optional("c", ArgType::Integer),
            ArgumentDescriptor::required("d", ArgType::Boolean),
        ]);

        assert_eq!(names(schema.required()), vec!["b", "d"]);
        assert_eq!(names(schema.optional()), vec!["a", "c"]);
        assert_eq!(names(schema.slots().iter()), vec!["a", "b", "c", "d"]);
        assert_eq!(schema.slots()[2].arg_type, ArgType::Integer);
    }

    #[test]
    fn given_no_slots_when_deriving_then_empty() {
        let schema = ArgumentSchema::derive(vec![]);
        assert!(schema.is_empty());
        assert_eq!(schema.required().count(), 0);
    }

    #[test]
    fn given_duplicate_slot_names_when_validating_then_schema_error() {
        let slots = vec![
            ArgumentDescriptor::required("name", ArgType::String),
            ArgumentDescriptor::optional("name", ArgType::Integer),
        ];

        let err = ArgumentSchema::validate("Greet", &slots).unwrap_err();

        assert!(matches!(err, DomainError::Schema { ref reason, .. } if reason.contains("twice")));
    }

    #[test]
    fn given_blank_or_malformed_slot_name_when_validating_then_schema_error() {
        for name in ["", "  ", "two words", "a=b"] {
            let slots = vec![ArgumentDescriptor::required(name, ArgType::String)];
            assert!(
                ArgumentSchema::validate("Cmd", &slots).is_err(),
                "name {name:?} accepted"
            );
        }
    }

    #[test]
    fn given_default_of_wrong_type_when_validating_then_schema_error() {
        let slots = vec![ArgumentDescriptor::optional("count", ArgType::Integer).with_default("many")];

        let err = ArgumentSchema::validate("Cmd", &slots).unwrap_err();

        assert!(matches!(err, DomainError::Schema { .. }));
    }
}
