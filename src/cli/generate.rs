//! Generate command for the matrix header.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::firmware::validator::ValidationWarning;
use crate::firmware::{write_keymap_h, KeymapGenerator, MatrixValidator};
use crate::models::{BoardProfile, Pin};
use crate::parser::parse_scancode_file;
use crate::services::partition;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Generate keymap.h from a scancode file
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to the scancode file
    #[arg(value_name = "SCANCODES")]
    pub scancodes: PathBuf,

    /// Where to write the header (default: ./keymap.h)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Board profile, overriding any board line in the scancode file
    #[arg(short, long, value_name = "BOARD")]
    pub board: Option<BoardProfile>,

    /// Print the header to stdout instead of writing a file
    #[arg(long, conflicts_with = "json")]
    pub stdout: bool,

    /// Print a JSON summary of the inferred matrix
    #[arg(long)]
    pub json: bool,

    /// Configuration file (default: platform config dir)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// JSON summary printed by `--json`.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// Board profile used for the I/O pin mapping
    pub board: BoardProfile,
    /// Row FPC pins
    pub rows: Vec<Pin>,
    /// Column FPC pins
    pub columns: Vec<Pin>,
    /// Teensy I/O numbers for the rows
    pub row_io: Vec<u8>,
    /// Teensy I/O numbers for the columns
    pub col_io: Vec<u8>,
    /// FPC pins that look unconnected
    pub unconnected_pins: Vec<Pin>,
    /// All validation warnings
    pub warnings: Vec<ValidationWarning>,
    /// Line numbers dropped as malformed
    pub skipped_lines: Vec<usize>,
    /// Written header path
    pub output: PathBuf,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = self.load_config()?;
        let quiet = self.stdout || self.json;

        let parsed = parse_scancode_file(&self.scancodes)
            .map_err(|e| CliError::usage(format!("{e:#}")))?;

        let board = match self.board {
            Some(board) => {
                if let Some(directive) = parsed.board_directive.filter(|d| *d != board) {
                    info!("--board {} overrides {} from the scancode file", board, directive);
                }
                board
            }
            None => parsed.board_or(config.default_board()),
        };

        info!(
            "Read {} switches across {} FPC pins",
            parsed.graph.keys().count(),
            parsed.graph.len()
        );

        let partition = partition(&parsed.graph);

        if !quiet {
            println!("Row pins: {}", join_pins(&partition.rows));
            println!("Column pins: {}", join_pins(&partition.columns));
        }

        let report = MatrixValidator::new(&parsed.graph, &partition, board).validate();
        if !report.is_valid() {
            let lead = if partition.rows.is_empty() || partition.columns.is_empty() {
                format!(
                    "Please fill out {} before running this script",
                    self.scancodes.display()
                )
            } else {
                format!("Cannot build a {} matrix", board)
            };
            return Err(CliError::validation(format!(
                "{}\n\n{}",
                lead,
                report.format_message().trim_end()
            )));
        }

        let unconnected = report.unconnected_pins();
        if !unconnected.is_empty() {
            warn!(
                "The following FPC pins appear to be unconnected: {}",
                join_pins(&unconnected)
            );
            warn!("Was everything wired up properly?");
        }

        let generator = KeymapGenerator::new(&parsed.graph, &partition, board);
        let header = generator
            .generate_keymap_h()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        if self.stdout {
            print!("{header}");
            return Ok(());
        }

        let output = self.output.clone().unwrap_or_else(|| config.output_path());
        write_keymap_h(&output, &header).map_err(|e| CliError::io(format!("{e:#}")))?;

        if self.json {
            let response = GenerateResponse {
                board,
                row_io: generator
                    .row_io()
                    .map_err(|e| CliError::validation(format!("{e:#}")))?,
                col_io: generator
                    .col_io()
                    .map_err(|e| CliError::validation(format!("{e:#}")))?,
                rows: partition.rows.clone(),
                columns: partition.columns.clone(),
                unconnected_pins: unconnected,
                warnings: report.warnings,
                skipped_lines: parsed.skipped_lines,
                output,
            };
            let json = serde_json::to_string_pretty(&response)
                .map_err(|e| CliError::io(format!("Failed to serialize summary: {e}")))?;
            println!("{json}");
        } else {
            println!(
                "Wrote config for {}x{} matrix to {}",
                partition.row_count(),
                partition.column_count(),
                output.display()
            );
        }

        Ok(())
    }

    fn load_config(&self) -> CliResult<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        config.map_err(|e| CliError::usage(format!("{e:#}")))
    }
}

fn join_pins(pins: &[Pin]) -> String {
    pins.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
