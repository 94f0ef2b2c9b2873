//! Raw value processing.
//!
//! A raw value wrapped in one matching pair of quotes, with at least one
//! character inside and no unescaped copy of that quote in between, is
//! unquoted:
//! - single quotes: the inner text is returned verbatim;
//! - double quotes: `\n` and `\r` become newline and carriage return, any
//!   other `\<c>` becomes `<c>` (except `\$`, kept for expansion), then
//!   `$VAR` / `${VAR}` references are expanded.
//!
//! Anything else, including `""`, `''` and `'a' 'b'`, is returned unchanged.

use super::expand::expand;
use crate::store::EnvStore;

/// How a raw value was quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    Single,
    Double,
    None,
}

impl Quoting {
    /// Classify `raw`, returning the quoting and the text inside the quotes.
    pub fn of(raw: &str) -> (Quoting, &str) {
        let quoting = match raw.chars().next() {
            Some('\'') => Quoting::Single,
            Some('"') => Quoting::Double,
            _ => return (Quoting::None, raw),
        };
        // Both quote characters are one byte.
        let quote = &raw[..1];
        if raw.len() < 3 || !raw.ends_with(quote) {
            return (Quoting::None, raw);
        }
        let inner = &raw[1..raw.len() - 1];
        if encloses(inner, quote) {
            (quoting, inner)
        } else {
            (Quoting::None, raw)
        }
    }
}

/// Whether `inner` has no unescaped `quote` and does not escape the closing one.
fn encloses(inner: &str, quote: &str) -> bool {
    let mut escaped = false;
    for c in inner.chars() {
        match c {
            '\\' if !escaped => escaped = true,
            c if !escaped && quote.starts_with(c) => return false,
            _ => escaped = false,
        }
    }
    !escaped
}

/// Turn a raw value into the string stored in the environment.
pub fn process_value<S: EnvStore + ?Sized>(raw: &str, store: &S) -> String {
    match Quoting::of(raw) {
        (Quoting::Single, inner) => inner.to_string(),
        (Quoting::Double, inner) => expand(&unescape(inner), store),
        (Quoting::None, raw) => raw.to_string(),
    }
}

fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('$') => out.push_str("\\$"),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}
