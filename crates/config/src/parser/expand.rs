//! Variable expansion.
//!
//! A reference is `$`, an optional `{`, a run of `[A-Z0-9_]`, and an optional
//! `}`. Each reference is replaced by the variable's current value, or by
//! nothing when the variable is undefined or the name is empty. A backslash
//! before `$` keeps the reference as literal text without the backslash.
//! `$(` is never a reference.

use crate::store::EnvStore;

fn is_name_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'
}

/// Replace every `$VAR` / `${VAR}` in `input` with its value from `store`.
pub fn expand<S: EnvStore + ?Sized>(input: &str, store: &S) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(['\\', '$']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("\\$") {
            out.push('$');
            rest = after;
            continue;
        }
        if let Some(after) = tail.strip_prefix('\\') {
            out.push('\\');
            rest = after;
            continue;
        }
        if tail.starts_with("$(") {
            out.push('$');
            rest = &tail[1..];
            continue;
        }

        let (name, consumed) = reference(tail);
        if !name.is_empty() {
            if let Some(value) = store.get(name) {
                out.push_str(&value);
            }
        }
        rest = &tail[consumed..];
    }

    out.push_str(rest);
    out
}

/// Split a reference starting at `$` into its name and total byte length.
fn reference(input: &str) -> (&str, usize) {
    let mut len = 1;
    if input[len..].starts_with('{') {
        len += 1;
    }
    let name_start = len;
    len += input[len..]
        .find(|c: char| !is_name_char(c))
        .unwrap_or(input.len() - len);
    let name = &input[name_start..len];
    if input[len..].starts_with('}') {
        len += 1;
    }
    (name, len)
}

/// If `input` is exactly one braced reference `${NAME}`, return the name.
pub fn whole_reference(input: &str) -> Option<&str> {
    let name = input.strip_prefix("${")?.strip_suffix('}')?;
    (!name.is_empty() && name.chars().all(is_name_char)).then_some(name)
}
