//! Env-file parsing.
//!
//! Responsibilities:
//! - Tokenize one `KEY=VALUE` line into a name and raw value (`line.rs`).
//! - Resolve quoting and escapes on the raw value (`value.rs`).
//! - Expand `$VAR` / `${VAR}` references against an `EnvStore` (`expand.rs`).
//!
//! Does NOT handle:
//! - Reading files or writing to the store (see `loader/dotenv.rs`).
//!
//! Invariants:
//! - Parsing is permissive: lines that do not match the grammar produce
//!   nothing and are never an error.
//! - Single-quoted values are taken literally; only double-quoted values are
//!   unescaped and expanded; unquoted values pass through unchanged.

mod expand;
mod line;
mod value;

pub use expand::{expand, whole_reference};
pub use line::{ParsedLine, parse_line};
pub use value::{Quoting, process_value};
