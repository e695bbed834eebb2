//! FPC Matrix Decoder library
//!
//! This library turns a list of keyboard switches wired between flex-cable
//! (FPC) pins into a Teensy scan-matrix header: it parses the scancode file,
//! infers which pins are rows and which are columns, validates the result
//! against the selected board, and renders `keymap.h`.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod firmware;
pub mod models;
pub mod parser;
pub mod services;
