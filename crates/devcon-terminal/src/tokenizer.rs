//! Line tokenizer.
//!
//! Splits a raw input line on spaces, keeping double-quoted substrings
//! together as a single token.

/// Tokenize a console input line.
///
/// - A `"` toggles quoted mode and is never part of a token.
/// - A space ends the current token unless quoted mode is active, in which
///   case it is kept literally.
/// - Each finished token is trimmed of surrounding whitespace and dropped
///   if that leaves it empty.
///
/// An unterminated quote is not an error: the rest of the line is simply
/// treated as quoted.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => quoted = !quoted,
            ' ' if quoted => current.push(ch),
            ' ' => flush(&mut current, &mut tokens),
            _ => current.push(ch),
        }
    }

    // The last token is not followed by a separator.
    flush(&mut current, &mut tokens);
    tokens
}

fn flush(current: &mut String, tokens: &mut Vec<String>) {
    let token = current.trim();
    if !token.is_empty() {
        tokens.push(token.to_string());
    }
    current.clear();
}
