//! Quote-aware command-line tokenizer.
//!
//! Whitespace separates tokens unless it sits inside a quoted region.
//! Either `"` or `'` opens a region, and only the same character closes it;
//! the other quote character is literal inside. Quotes are stripped and
//! quoted text joins whatever unquoted text touches it, so `a"b c"` is the
//! single token `ab c`. An explicit `""` yields an empty token.

use crate::error::ParseError;

/// Split `line` into its command name and argument list.
///
/// The command is empty when the line holds no tokens.
pub fn tokenize(line: &str) -> Result<(String, Vec<String>), ParseError> {
    let mut tokens = split(line)?.into_iter();
    let command = tokens.next().unwrap_or_default();
    Ok((command, tokens.collect()))
}

/// Split `line` into raw tokens.
pub fn split(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    // A token is open once any character or quote pair has been seen, so
    // `""` still produces an (empty) token.
    let mut in_token = false;
    let mut quote: Option<(char, usize)> = None;

    for (position, ch) in line.chars().enumerate() {
        match quote {
            Some((open, _)) if ch == open => quote = None,
            Some(_) => current.push(ch),
            None => match ch {
                '"' | '\'' => {
                    quote = Some((ch, position));
                    in_token = true;
                }
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                c => {
                    current.push(c);
                    in_token = true;
                }
            },
        }
    }

    if let Some((quote, position)) = quote {
        return Err(ParseError::UnterminatedQuote { quote, position });
    }
    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}
