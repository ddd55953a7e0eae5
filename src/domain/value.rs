//! Argument values and coercion of raw tokens into them

use crate::domain::{ArgType, ArgumentDescriptor, DomainError, DomainResult};

/// A coerced argument value, handed to a command's setter.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// Canonical member name of an enumerated type
    Enum(&'static str),
    /// Nullable slot without a value
    Null,
}

impl ArgValue {
    /// Extract a typed value, failing with a slot mismatch when the value has
    /// a different shape than the setter expects.
    pub fn extract<T: FromArgValue>(self, slot: &str) -> DomainResult<T> {
        let shape = self.shape();
        T::from_arg_value(self).ok_or_else(|| DomainError::SlotMismatch {
            slot: slot.to_string(),
            reason: format!("cannot convert {} value to {}", shape, T::EXPECTED),
        })
    }

    /// Convert an enum member into the command's own enum type.
    pub fn into_enum<E: ArgEnum>(self, slot: &str) -> DomainResult<E> {
        match self {
            ArgValue::Enum(member) => E::from_member(member).ok_or_else(|| {
                DomainError::SlotMismatch {
                    slot: slot.to_string(),
                    reason: format!("'{}' is not a member of the target enum", member),
                }
            }),
            other => Err(DomainError::SlotMismatch {
                slot: slot.to_string(),
                reason: format!("cannot convert {} value to enum", other.shape()),
            }),
        }
    }

    fn shape(&self) -> &'static str {
        match self {
            ArgValue::String(_) => "string",
            ArgValue::Integer(_) => "integer",
            ArgValue::Float(_) => "float",
            ArgValue::Boolean(_) => "boolean",
            ArgValue::Enum(_) => "enum",
            ArgValue::Null => "null",
        }
    }
}

/// Rust types a setter can extract from an [`ArgValue`].
pub trait FromArgValue: Sized {
    /// Type name used in mismatch messages.
    const EXPECTED: &'static str;

    fn from_arg_value(value: ArgValue) -> Option<Self>;
}

impl FromArgValue for String {
    const EXPECTED: &'static str = "string";

    fn from_arg_value(value: ArgValue) -> Option<Self> {
        match value {
            ArgValue::String(s) => Some(s),
            ArgValue::Enum(member) => Some(member.to_string()),
            _ => None,
        }
    }
}

impl FromArgValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_arg_value(value: ArgValue) -> Option<Self> {
        match value {
            ArgValue::Boolean(b) => Some(b),
            _ => None,
        }
    }
}

impl FromArgValue for f64 {
    const EXPECTED: &'static str = "float";

    fn from_arg_value(value: ArgValue) -> Option<Self> {
        match value {
            ArgValue::Float(f) => Some(f),
            ArgValue::Integer(i) => Some(i as f64),
            _ => None,
        }
    }
}

impl FromArgValue for f32 {
    const EXPECTED: &'static str = "float";

    fn from_arg_value(value: ArgValue) -> Option<Self> {
        f64::from_arg_value(value).map(|f| f as f32)
    }
}

macro_rules! integer_from_arg_value {
    ($($ty:ty),*) => {
        $(
            impl FromArgValue for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn from_arg_value(value: ArgValue) -> Option<Self> {
                    match value {
                        ArgValue::Integer(i) => <$ty>::try_from(i).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

integer_from_arg_value!(i64, i32, u32, u64, usize);

impl<T: FromArgValue> FromArgValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_arg_value(value: ArgValue) -> Option<Self> {
        match value {
            ArgValue::Null => Some(None),
            other => T::from_arg_value(other).map(Some),
        }
    }
}

/// Enumerations usable as argument types.
///
/// ```ignore
/// #[derive(Clone, Copy)]
/// enum Level { Low, High }
///
/// impl ArgEnum for Level {
///     const MEMBERS: &'static [&'static str] = &["Low", "High"];
///     fn from_member(member: &str) -> Option<Self> {
///         match member {
///             "Low" => Some(Level::Low),
///             "High" => Some(Level::High),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait ArgEnum: Sized {
    /// Canonical member names, in declaration order.
    const MEMBERS: &'static [&'static str];

    /// Map a canonical member name back to the enum.
    fn from_member(member: &str) -> Option<Self>;

    fn arg_type() -> ArgType {
        ArgType::Enum(Self::MEMBERS)
    }
}

/// Coerce a raw token into the slot's target type.
///
/// Failures name the slot, the command and the offending raw value.
pub fn coerce(raw: &str, slot: &ArgumentDescriptor, command: &str) -> DomainResult<ArgValue> {
    parse_as(raw, &slot.arg_type).ok_or_else(|| DomainError::Format {
        slot: slot.name.clone(),
        command: command.to_string(),
        value: raw.to_string(),
        expected: slot.arg_type.underlying().to_string(),
    })
}

fn parse_as(raw: &str, arg_type: &ArgType) -> Option<ArgValue> {
    match arg_type {
        ArgType::String => Some(ArgValue::String(raw.to_string())),
        ArgType::Integer => raw.trim().parse().ok().map(ArgValue::Integer),
        ArgType::Float => raw.trim().parse().ok().map(ArgValue::Float),
        ArgType::Boolean => parse_bool(raw.trim()).map(ArgValue::Boolean),
        ArgType::Enum(members) => {
            let raw = raw.trim();
            members
                .iter()
                .find(|member| member.eq_ignore_ascii_case(raw))
                .map(|member| ArgValue::Enum(*member))
        }
        ArgType::Nullable(inner) => parse_as(raw, inner),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
