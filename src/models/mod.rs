//! Data models for scancode wirings, board profiles and the scan matrix.
//!
//! Models are plain data with no I/O; the parser builds them and the
//! firmware module consumes them.

pub mod board;
pub mod graph;
pub mod key;
pub mod partition;

/// Logical FPC connector pin, 1-based.
pub type Pin = u32;

// Re-export all model types
pub use board::BoardProfile;
pub use graph::ConnectionGraph;
pub use key::{Key, KeyClass, MODIFIER_PREFIX};
pub use partition::Partition;
