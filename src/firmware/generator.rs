//! `keymap.h` generation.
//!
//! The header is consumed by the Teensy matrix scanner sketch: three
//! `MATRIX_ROWS x MATRIX_COLS` keycode tables indexed by scan position, and
//! the Teensy I/O numbers to drive for each row and column.

use crate::constants::{HEADER_GUARD, LAYOUT_INCLUDE, MODIFIERKEY_FN};
use crate::models::{BoardProfile, ConnectionGraph, KeyClass, Partition, Pin};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Cell value for a scan position with no key in the table.
const EMPTY_CELL: &str = "0";

/// Generates the matrix header from an inferred partition.
pub struct KeymapGenerator<'a> {
    graph: &'a ConnectionGraph,
    partition: &'a Partition,
    board: BoardProfile,
}

impl<'a> KeymapGenerator<'a> {
    /// Creates a generator for the given wiring on `board`.
    pub const fn new(
        graph: &'a ConnectionGraph,
        partition: &'a Partition,
        board: BoardProfile,
    ) -> Self {
        Self {
            graph,
            partition,
            board,
        }
    }

    /// Renders the complete `keymap.h` contents.
    ///
    /// Output depends only on the inputs, so identical wiring always yields
    /// byte-identical headers.
    ///
    /// # Errors
    ///
    /// Fails if a row or column pin does not exist on the board.
    pub fn generate_keymap_h(&self) -> Result<String> {
        let row_io = self.row_io()?;
        let col_io = self.col_io()?;

        let sections = [
            format!("#ifndef {HEADER_GUARD}\n#define {HEADER_GUARD}"),
            format!("#include <{LAYOUT_INCLUDE}>"),
            format!("#define MODIFIERKEY_FN {MODIFIERKEY_FN}"),
            format!("#define MATRIX_ROWS {}", self.partition.row_count()),
            format!("#define MATRIX_COLS {}", self.partition.column_count()),
            self.generate_table("normal", KeyClass::Normal),
            self.generate_table("modifier", KeyClass::Modifier),
            self.generate_table("media", KeyClass::Alternate),
            format!("int Row_IO[MATRIX_ROWS] = {{ {} }};", join_numbers(&row_io)),
            format!("int Col_IO[MATRIX_COLS] = {{ {} }};", join_numbers(&col_io)),
            "#endif".to_string(),
        ];

        let mut header = sections.join("\n\n");
        header.push('\n');
        Ok(header)
    }

    /// Renders one keycode table holding only keys of `class`.
    pub fn generate_table(&self, name: &str, class: KeyClass) -> String {
        let rows: Vec<String> = self
            .partition
            .rows
            .iter()
            .map(|&row| {
                let cells: Vec<&str> = self
                    .partition
                    .columns
                    .iter()
                    .map(|&col| match self.graph.key_between(row, col) {
                        Some(key) if key.class() == class => key.name.as_str(),
                        _ => EMPTY_CELL,
                    })
                    .collect();
                format!("{{ {} }}", cells.join(", "))
            })
            .collect();

        format!(
            "int {}[MATRIX_ROWS][MATRIX_COLS] = {{\n\t{}\n}};",
            name,
            rows.join(",\n\t")
        )
    }

    /// Teensy I/O numbers for the row pins, in matrix order.
    pub fn row_io(&self) -> Result<Vec<u8>> {
        self.io_pins(&self.partition.rows)
    }

    /// Teensy I/O numbers for the column pins, in matrix order.
    pub fn col_io(&self) -> Result<Vec<u8>> {
        self.io_pins(&self.partition.columns)
    }

    fn io_pins(&self, pins: &[Pin]) -> Result<Vec<u8>> {
        pins.iter()
            .map(|&pin| {
                self.board.io_pin(pin).with_context(|| {
                    format!(
                        "FPC pin {} is not available on {} ({} pins)",
                        pin,
                        self.board,
                        self.board.max_pin()
                    )
                })
            })
            .collect()
    }
}

/// Writes the header, replacing any existing file.
///
/// The contents go to a temporary file next to `path` which is then renamed
/// over it, so a failed write never leaves a truncated header behind.
pub fn write_keymap_h(path: &Path, contents: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Output path has no file name: {}", path.display()))?;
    let temp_path = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    fs::write(&temp_path, contents)
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| format!("Failed to replace {}", path.display()));
    }

    Ok(())
}

fn join_numbers(values: &[u8]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
