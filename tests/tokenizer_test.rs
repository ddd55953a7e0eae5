//! Integration tests for tokenizing and classifying input lines.

use rstest::rstest;

use cmdkit::domain::{tokenize, TokenSet};
use cmdkit::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_quoted_value_when_tokenizing_then_quotes_kept_until_classification() {
    // Arrange
    let line = r#"foo "bar baz" qux"#;

    // Act
    let tokens = tokenize(line);
    let mut set = TokenSet::classify(&tokens[1..]);

    // Assert
    assert_eq!(tokens, vec!["foo", "\"bar baz\"", "qux"]);
    assert_eq!(set.take("first").as_deref(), Some("bar baz"));
    assert_eq!(set.take("second").as_deref(), Some("qux"));
}

#[rstest]
#[case("--count=5 a b", "count", Some("5"))]
#[case("a --count=5 b", "count", Some("5"))]
#[case("a --verbose", "verbose", Some("true"))]
#[case(r#"--label="two words""#, "label", Some("two words"))]
fn given_named_token_when_taking_slot_then_value_found_regardless_of_position(
    #[case] line: &str,
    #[case] slot: &str,
    #[case] expected: Option<&str>,
) {
    // Arrange
    let mut set = TokenSet::classify(tokenize(line).as_slice());

    // Act
    let value = set.take(slot);

    // Assert
    assert_eq!(value.as_deref(), expected);
}

#[test]
fn given_named_and_positional_tokens_when_classifying_then_positionals_untouched() {
    // Arrange
    let mut set = TokenSet::classify(tokenize("a --count=5 b").as_slice());

    // Act
    let count = set.take("count");

    // Assert
    assert_eq!(count.as_deref(), Some("5"));
    assert_eq!(set.positional().collect::<Vec<_>>(), vec!["a", "b"]);
}
