//! CLI command handling for the matrix generator.
//!
//! This module wires argument parsing, configuration and the generation
//! pipeline together and maps failures to exit codes.

pub mod common;
pub mod generate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use generate::GenerateArgs;
