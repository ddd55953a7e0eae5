//! Splitting of raw input lines into tokens

/// Split a raw input line on unquoted spaces.
///
/// Double quotes group text containing spaces and are kept in the token;
/// stripping them is left to argument classification. The last token is
/// always emitted, so trailing whitespace yields a trailing empty token.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ' ' if !in_quotes => tokens.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    tokens.push(current);

    tokens
}
