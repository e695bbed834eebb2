//! Service layer for matrix inference.
//!
//! This module holds the logic that turns a bare wiring graph into a scan
//! matrix layout.

pub mod partition;

// Re-export commonly used functions
pub use partition::{orphaned_keys, partition};
