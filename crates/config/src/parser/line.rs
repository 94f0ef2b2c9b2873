//! Line tokenizer for env files.
//!
//! Grammar, applied to one line:
//!
//! ```text
//! line      := ws* key separator value? ws* comment?
//! key       := [A-Za-z0-9_.]+
//! separator := ws* '=' | ':' ws+
//! value     := ws* '\'' ... '\''  |  ws* '"' ... '"'  |  [^#]+
//! comment   := '#' any*
//! ```
//!
//! A quote escaped with a backslash does not close a quoted value. A quoted
//! value followed by anything other than whitespace or a comment is re-read
//! as an unquoted value. In unquoted values `\#` does not start a comment.

/// Name and raw (still quoted) value extracted from one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub name: &'a str,
    pub raw_value: &'a str,
}

/// Tokenizer states, in the order a well-formed line visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectKey,
    ExpectSeparator,
    InSingleQuote,
    InDoubleQuote,
    Unquoted,
    Comment,
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Parse one line. Comments, blank lines and lines outside the grammar
/// yield `None`.
pub fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    let mut state = State::ExpectKey;
    let mut name = "";
    let mut rest = line;

    loop {
        match state {
            State::ExpectKey => {
                rest = rest.trim_start();
                if rest.is_empty() {
                    return None;
                }
                if rest.starts_with('#') {
                    state = State::Comment;
                    continue;
                }
                let end = rest.find(|c: char| !is_key_char(c)).unwrap_or(rest.len());
                if end == 0 {
                    return None;
                }
                (name, rest) = rest.split_at(end);
                state = State::ExpectSeparator;
            }
            State::ExpectSeparator => {
                rest = separator(rest)?.trim_start();
                state = match rest.chars().next() {
                    Some('\'') => State::InSingleQuote,
                    Some('"') => State::InDoubleQuote,
                    _ => State::Unquoted,
                };
            }
            State::InSingleQuote | State::InDoubleQuote => {
                let quote = if state == State::InSingleQuote { '\'' } else { '"' };
                if let Some(end) = closing_quote(rest, quote) {
                    let (quoted, after) = rest.split_at(end + 1);
                    let after = after.trim_start();
                    if after.is_empty() || after.starts_with('#') {
                        return Some(ParsedLine {
                            name,
                            raw_value: quoted,
                        });
                    }
                }
                state = State::Unquoted;
            }
            State::Unquoted => {
                let end = unescaped_hash(rest).unwrap_or(rest.len());
                return Some(ParsedLine {
                    name,
                    raw_value: rest[..end].trim(),
                });
            }
            State::Comment => return None,
        }
    }
}

/// Consume `ws* '='` or `':' ws+`, returning what follows.
fn separator(input: &str) -> Option<&str> {
    if let Some(after) = input.trim_start().strip_prefix('=') {
        return Some(after);
    }
    let after = input.strip_prefix(':')?;
    after.starts_with(char::is_whitespace).then_some(after)
}

/// Byte index of the first unescaped `quote` after the opening one.
fn closing_quote(input: &str, quote: char) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in input.char_indices().skip(1) {
        match c {
            '\\' if !escaped => escaped = true,
            c if c == quote && !escaped => return Some(i),
            _ => escaped = false,
        }
    }
    None
}

fn unescaped_hash(input: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in input.char_indices() {
        match c {
            '\\' if !escaped => escaped = true,
            '#' if !escaped => return Some(i),
            _ => escaped = false,
        }
    }
    None
}
