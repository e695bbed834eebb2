//! Scancode file parsing.
//!
//! A scancode file lists one switch per line:
//!
//! ```text
//! # name          [FN]  pin  pin
//! KEY_A                 12   5
//! KEY_MEDIA_MUTE  FN    12   7
//! TEENSY32
//! ```
//!
//! Everything after `#` is a comment. A line holding only a board name
//! selects the board profile for the whole file. Lines that do not carry
//! exactly two pins are skipped without complaint, which lets a partially
//! filled-in key list be run through the generator.

use crate::constants::{ALTERNATE_MARKER, COMMENT_MARKER};
use crate::models::{BoardProfile, ConnectionGraph, Key, Pin};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// Result of folding every line of a scancode file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedScancodes {
    /// Switch wiring between FPC pins
    pub graph: ConnectionGraph,
    /// Board named by the last directive line, if any
    pub board_directive: Option<BoardProfile>,
    /// 1-based numbers of lines that were dropped as malformed
    pub skipped_lines: Vec<usize>,
}

impl ParsedScancodes {
    /// The board directive, or `fallback` when the file has none.
    pub fn board_or(&self, fallback: BoardProfile) -> BoardProfile {
        self.board_directive.unwrap_or(fallback)
    }
}

/// Classification of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// Empty or comment-only
    Blank,
    /// Board profile switch
    Board(BoardProfile),
    /// Switch wired between two pins, lower pin first
    Switch(Pin, Pin, Key),
    /// Anything else
    Malformed,
}

/// Reads and parses a scancode file.
///
/// # Errors
///
/// Returns errors when the file does not exist, is not a regular file or
/// is not valid UTF-8. Malformed lines are not errors.
pub fn parse_scancode_file(path: &Path) -> Result<ParsedScancodes> {
    if !path.exists() {
        anyhow::bail!("Scancode file {} does not exist", path.display());
    }

    if !path.is_file() {
        anyhow::bail!("Path is not a file: {}", path.display());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scancode file: {}", path.display()))?;

    Ok(parse_scancodes_str(&content))
}

/// Parses scancode text into a connection graph.
pub fn parse_scancodes_str(content: &str) -> ParsedScancodes {
    content
        .lines()
        .enumerate()
        .fold(ParsedScancodes::default(), |mut parsed, (idx, raw)| {
            let line_no = idx + 1;
            match parse_line(raw) {
                Line::Blank => {}
                Line::Board(board) => {
                    info!("Using {} board", board);
                    parsed.board_directive = Some(board);
                }
                Line::Switch(low, high, key) => {
                    if let Some(replaced) = parsed.graph.connect(low, high, key) {
                        debug!(
                            line = line_no,
                            "pins {}-{} reassigned, dropping {}", low, high, replaced.name
                        );
                    }
                }
                Line::Malformed => {
                    debug!(line = line_no, "skipping line without a pin pair: {:?}", raw);
                    parsed.skipped_lines.push(line_no);
                }
            }
            parsed
        })
}

fn parse_line(raw: &str) -> Line {
    let line = strip_comment(raw).trim();
    if line.is_empty() {
        return Line::Blank;
    }

    if let Some(board) = BoardProfile::from_name(line) {
        return Line::Board(board);
    }

    let mut tokens = line.split_whitespace().peekable();
    let Some(name) = tokens.next() else {
        return Line::Blank;
    };

    let alternate = tokens.next_if_eq(&ALTERNATE_MARKER).is_some();
    let key = Key {
        name: name.to_string(),
        alternate,
    };

    match parse_pin_pair(tokens) {
        Some((low, high)) => Line::Switch(low, high, key),
        None => Line::Malformed,
    }
}

fn strip_comment(line: &str) -> &str {
    line.split_once(COMMENT_MARKER)
        .map_or(line, |(before, _)| before)
}

/// Parses exactly two distinct, non-zero pins and returns them ascending.
fn parse_pin_pair<'a>(tokens: impl Iterator<Item = &'a str>) -> Option<(Pin, Pin)> {
    let pins: Vec<Pin> = tokens
        .map(|token| token.parse::<Pin>().ok())
        .collect::<Option<_>>()?;

    match pins.as_slice() {
        &[a, b] if a != 0 && b != 0 && a != b => Some((a.min(b), a.max(b))),
        _ => None,
    }
}
