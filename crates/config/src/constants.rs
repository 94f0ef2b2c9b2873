//! Centralized constants for the envtree workspace.
//!
//! Default file and directory names used when a root is loaded without
//! explicit overrides, plus the recognized section file extensions.

// =============================================================================
// Load Defaults
// =============================================================================

/// Directory (relative to the root) that holds section files.
pub const DEFAULT_SECTIONS_DIR: &str = "settings";

/// Env file name (relative to the root).
pub const DEFAULT_ENV_FILE: &str = ".env";

// =============================================================================
// Section Files
// =============================================================================

/// File extensions recognized as section files.
///
/// Each extension selects the parser used for the file body.
pub const SECTION_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "toml"];

/// Separator used by dot-path lookups.
pub const PATH_SEPARATOR: char = '.';
