//! Shared CLI error type, exit codes and help text.

use crate::constants::APP_BINARY_NAME;
use std::fmt;

/// Description of the scancode file format, shown in `--help` and after
/// every usage or content error.
pub const SCANCODE_FORMAT_HELP: &str = "\
Generates a keymap.h from a scancode list.
Scancode lines should be a tab-delimited file with columns
    KEY_NAME\t[FN]\tPIN1\tPIN2
'FN' is optional and, if present, marks the key as alternate, triggered by the Fn key.
Keys without pins are ignored.
Everything after '#' on a line is ignored.
Switch between TEENSYLC, TEENSY32 and TEENSY40 by adding the board name as a line.";

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Header generated
    Success = 0,
    /// Missing or unreadable input, bad configuration
    UsageError = 1,
    /// Input parsed but yields no usable matrix
    ValidationError = 3,
    /// Header could not be written
    IoError = 4,
}

impl ExitCode {
    /// Numeric status passed to `std::process::exit`.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub exit_code: ExitCode,
    /// Message shown to the user
    pub message: String,
}

impl CliError {
    /// Bad invocation or unreadable input.
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::UsageError,
            message: message.into(),
        }
    }

    /// Input that cannot be turned into a matrix header.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Failure writing output.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Whether the usage text should follow the message.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self.exit_code,
            ExitCode::UsageError | ExitCode::ValidationError
        )
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// One-line usage summary.
pub fn usage_line() -> String {
    format!("Usage: {} [OPTIONS] <SCANCODES>", APP_BINARY_NAME)
}
