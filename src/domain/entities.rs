//! Domain entities: command and argument metadata

use std::fmt;

/// Names and description of a command.
///
/// Aliases are matched case-insensitively. The first alias is the primary
/// name, used in error messages and usage lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub names: Vec<String>,
    pub description: String,
}

impl CommandDescriptor {
    /// Descriptor with a single name.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
            description: description.into(),
        }
    }

    /// Descriptor with several aliases, primary name first.
    pub fn with_aliases(names: &[&str], description: impl Into<String>) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            description: description.into(),
        }
    }

    pub fn primary_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }
}

/// Semantic target type of an argument slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgType {
    String,
    /// 64-bit signed integer
    Integer,
    /// 64-bit float
    Float,
    Boolean,
    /// Enumerated value; members are matched case-insensitively.
    Enum(&'static [&'static str]),
    /// Nullable wrapper around another type.
    Nullable(Box<ArgType>),
}

impl ArgType {
    pub fn nullable(inner: ArgType) -> Self {
        Self::Nullable(Box::new(inner))
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Innermost non-nullable type.
    pub fn underlying(&self) -> &ArgType {
        match self {
            Self::Nullable(inner) => inner.underlying(),
            other => other,
        }
    }

    /// Value shown in usage examples when the slot declares none.
    pub fn example_value(&self) -> String {
        match self.underlying() {
            Self::Integer => "42".into(),
            Self::Float => "3.14".into(),
            Self::Boolean => "true".into(),
            Self::Enum(members) => members.first().copied().unwrap_or_default().into(),
            _ => "\"example string\"".into(),
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "String"),
            Self::Integer => write!(f, "Integer"),
            Self::Float => write!(f, "Float"),
            Self::Boolean => write!(f, "Boolean"),
            Self::Enum(members) => write!(f, "one of [{}]", members.join(", ")),
            Self::Nullable(inner) => write!(f, "{}?", inner),
        }
    }
}

/// One declared argument slot of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentDescriptor {
    /// Name matched by `--name` / `--name=value`
    pub name: String,
    pub description: String,
    pub required: bool,
    pub arg_type: ArgType,
    /// Raw value bound when an optional slot receives no token
    pub default_value: Option<String>,
    /// Example value for usage lines
    pub example: Option<String>,
}

impl ArgumentDescriptor {
    pub fn required(name: impl Into<String>, arg_type: ArgType) -> Self {
        Self::new(name, arg_type, true)
    }

    pub fn optional(name: impl Into<String>, arg_type: ArgType) -> Self {
        Self::new(name, arg_type, false)
    }

    fn new(name: impl Into<String>, arg_type: ArgType, required: bool) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            required,
            arg_type,
            default_value: None,
            example: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default(mut self, raw: impl Into<String>) -> Self {
        self.default_value = Some(raw.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Declared example, falling back to one derived from the type.
    pub fn example_value(&self) -> String {
        self.example
            .clone()
            .unwrap_or_else(|| self.arg_type.example_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_aliases_when_primary_name_then_returns_first() {
        let descriptor = CommandDescriptor::with_aliases(&["help", "h"], "Shows help");
        assert_eq!(descriptor.primary_name(), "help");
    }

    #[test]
    fn given_no_names_when_primary_name_then_empty() {
        let descriptor = CommandDescriptor {
            names: vec![],
            description: String::new(),
        };
        assert_eq!(descriptor.primary_name(), "");
    }

    #[test]
    fn given_nested_nullable_when_underlying_then_unwraps_all_layers() {
        let ty = ArgType::nullable(ArgType::nullable(ArgType::Float));
        assert_eq!(ty.underlying(), &ArgType::Float);
        assert!(ty.is_nullable());
    }

    #[test]
    fn given_types_when_displayed_then_readable() {
        assert_eq!(ArgType::nullable(ArgType::Integer).to_string(), "Integer?");
        assert_eq!(
            ArgType::Enum(&["Idle", "Running"]).to_string(),
            "one of [Idle, Running]"
        );
    }

    #[test]
    fn given_slot_without_example_when_example_value_then_derived_from_type() {
        let slot = ArgumentDescriptor::optional("level", ArgType::Enum(&["Low", "High"]));
        assert_eq!(slot.example_value(), "Low");

        let slot = ArgumentDescriptor::required("path", ArgType::String).with_example("/tmp");
        assert_eq!(slot.example_value(), "/tmp");
    }
}
