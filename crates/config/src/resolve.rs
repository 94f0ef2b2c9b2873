//! Dot-path lookups over a configuration tree.
//!
//! Invariants:
//! - Lookups are read-only and never fail: a missing key, an index into a
//!   scalar, or a `Null` node all resolve to "absent".
//! - A path without a separator is a single key.

use crate::constants::PATH_SEPARATOR;
use crate::value::ConfigValue;

/// Walk `path` from `root`, one segment at a time.
pub fn resolve<'a>(root: &'a ConfigValue, path: &str) -> Option<&'a ConfigValue> {
    path.split(PATH_SEPARATOR)
        .try_fold(root, |node, segment| node.child(segment))
        .filter(|node| !node.is_null())
}

/// Like [`resolve`], returning `default` when the path is absent.
pub fn resolve_or<'a>(
    root: &'a ConfigValue,
    path: &str,
    default: &'a ConfigValue,
) -> &'a ConfigValue {
    resolve(root, path).unwrap_or(default)
}
