//! Application-wide constants.
//!
//! This module defines the binary name and the fixed tokens shared by
//! the scancode parser and the header generator.

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "fpc-matrix";

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "fpc-matrix";

/// File name of the generated header.
pub const KEYMAP_FILE_NAME: &str = "keymap.h";

/// Starts a comment that runs to the end of the line.
pub const COMMENT_MARKER: char = '#';

/// Token after the key name that marks an Fn-layer key.
pub const ALTERNATE_MARKER: &str = "FN";

/// Include guard of the generated header.
pub const HEADER_GUARD: &str = "KEYMAP_H";

/// Teensyduino header that defines the `KEY_*` and `MODIFIERKEY_*` codes.
pub const LAYOUT_INCLUDE: &str = "keylayouts.h";

/// Modifier code the firmware uses for the hardware Fn key.
pub const MODIFIERKEY_FN: &str = "0x8f";
