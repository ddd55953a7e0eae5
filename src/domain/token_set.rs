//! Classification of raw tokens into named and positional values

use std::collections::{HashMap, VecDeque};

use tracing::warn;

/// Prefix marking a named token (`--name` or `--name=value`).
pub const NAMED_PREFIX: &str = "--";

/// Value implied by a named token without `=value`.
pub const FLAG_VALUE: &str = "true";

/// Tokens of one invocation, split into positional and named values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    positional: VecDeque<String>,
    named: HashMap<String, String>,
}

impl TokenSet {
    /// Classify raw tokens.
    ///
    /// `--name=value` and `--name` go to the named map (the latter with value
    /// `"true"`); anything else is queued as positional. Surrounding double
    /// quotes are stripped from every value. Empty positional values, as
    /// produced by repeated or trailing spaces, are dropped.
    pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut set = Self::default();

        for token in tokens {
            let token = token.as_ref();
            match parse_named(token) {
                Some((name, value)) => {
                    if let Some(previous) = set.named.insert(name.to_string(), value.clone()) {
                        warn!(
                            "named argument '{}' given twice: '{}' replaced by '{}'",
                            name, previous, value
                        );
                    }
                }
                None => {
                    let value = strip_quotes(token);
                    if !value.is_empty() {
                        set.positional.push_back(value.to_string());
                    }
                }
            }
        }

        set
    }

    /// Take the value for a slot: its named token if present, otherwise the
    /// next positional token. Either source is consumed. Empty values count
    /// as absent.
    pub fn take(&mut self, slot: &str) -> Option<String> {
        self.named
            .remove(slot)
            .or_else(|| self.positional.pop_front())
            .filter(|value| !value.is_empty())
    }

    pub fn positional(&self) -> impl Iterator<Item = &str> {
        self.positional.iter().map(String::as_str)
    }

    pub fn named(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }

    pub fn named_names(&self) -> impl Iterator<Item = &str> {
        self.named.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

/// Split a named token into name and raw value; `None` for positional tokens.
fn parse_named(token: &str) -> Option<(&str, String)> {
    let rest = token.strip_prefix(NAMED_PREFIX)?;
    let (name, value) = match rest.split_once('=') {
        Some((name, value)) => (name, strip_quotes(value)),
        None => (rest, FLAG_VALUE),
    };
    Some((name, value.to_string()))
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("--count=5", Some(("count", "5")))]
    #[case("--shout", Some(("shout", "true")))]
    #[case("--text=\"a b\"", Some(("text", "a b")))]
    #[case("--expr=a=b", Some(("expr", "a=b")))]
    #[case("--empty=", Some(("empty", "")))]
    #[case("-v", None)]
    #[case("plain", None)]
    fn test_parse_named(#[case] token: &str, #[case] expected: Option<(&str, &str)>) {
        let parsed = parse_named(token);
        assert_eq!(
            parsed.as_ref().map(|(n, v)| (*n, v.as_str())),
            expected
        );
    }

    #[test]
    fn given_mixed_tokens_when_classifying_then_split_by_prefix() {
        let set = TokenSet::classify(&["Alice", "--shout", "\"two words\""]);

        assert_eq!(set.positional().collect::<Vec<_>>(), vec!["Alice", "two words"]);
        assert_eq!(set.named("shout"), Some("true"));
    }

    #[test]
    fn given_empty_positional_tokens_when_classifying_then_dropped() {
        let set = TokenSet::classify(&["", "a", "", "\"\""]);
        assert_eq!(set.positional().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn given_repeated_name_when_classifying_then_last_wins() {
        let set = TokenSet::classify(&["--n=1", "--n=2"]);
        assert_eq!(set.named("n"), Some("2"));
    }

    #[test]
    fn given_named_and_positional_when_taking_then_named_preferred_and_consumed() {
        let mut set = TokenSet::classify(&["pos", "--slot=named"]);

        assert_eq!(set.take("slot").as_deref(), Some("named"));
        assert_eq!(set.take("slot").as_deref(), Some("pos"));
        assert_eq!(set.take("slot"), None);
        assert!(set.is_empty());
    }

    #[test]
    fn given_empty_named_value_when_taking_then_absent() {
        let mut set = TokenSet::classify(&["--name="]);
        assert_eq!(set.take("name"), None);
    }
}
