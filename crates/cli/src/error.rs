//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map load and lookup failures to those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use envtree_config::SettingsError;
use thiserror::Error;

/// Structured exit codes for envtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Load failure - the env file could not be read.
    ///
    /// Scripts should check the root directory and file name.
    LoadFailed = 2,

    /// Not found - the requested path or variable is not defined.
    NotFound = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Lookup failures raised by commands.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Setting '{0}' is not defined")]
    SettingNotFound(String),

    #[error("Environment variable '{0}' is not defined")]
    VariableNotFound(String),
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<SettingsError>().is_some() {
                return ExitCode::LoadFailed;
            }
            if cause.downcast_ref::<CliError>().is_some() {
                return ExitCode::NotFound;
            }
        }
        ExitCode::GeneralError
    }
}
