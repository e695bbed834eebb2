//! Shared test fixtures for generator and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A 3x4 numpad wired to a Teensy 3.2, with one modifier, one Fn key, a
/// comment, a key that has not been traced yet, and FPC pin 4 left unused.
pub const NUMPAD_SCANCODES: &str = include_str!("numpad_scancodes.txt");

/// Reference header for [`NUMPAD_SCANCODES`].
pub const NUMPAD_KEYMAP_H: &str = include_str!("../golden/numpad_keymap.h");

/// A ten-key block on FPC pins 2-12 plus one stray switch between pins 9
/// and 14, so equal-degree pins straddle the one/two digit boundary.
pub const TENKEY_SCANCODES: &str = include_str!("tenkey_scancodes.txt");

/// Reference header for [`TENKEY_SCANCODES`].
pub const TENKEY_KEYMAP_H: &str = include_str!("../golden/tenkey_keymap.h");

/// The smallest useful input: two independent switches.
pub const TWO_KEYS: &str = "A\t1\t2\nB\t3\t4\n";

/// Writes `contents` to `scancodes.txt` in a fresh temp dir.
///
/// The returned `TempDir` must be kept alive for the file to exist.
pub fn create_temp_scancode_file(contents: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("scancodes.txt");
    fs::write(&path, contents).expect("Failed to write scancode file");
    (path, temp_dir)
}

/// Writes a config file into `dir` so tests never read the user's config.
pub fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config file");
    path
}
