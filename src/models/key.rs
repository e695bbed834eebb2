//! Key records read from a scancode file.

use serde::Serialize;

/// Name prefix that marks a key as a modifier.
///
/// `keylayouts.h` names every modifier code `MODIFIERKEY_*`, and the
/// firmware scans modifiers from their own table, so header authors rely on
/// this prefix to route a key.
pub const MODIFIER_PREFIX: &str = "MODIFIER";

/// Which generated table a key is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyClass {
    /// Ordinary key, `normal` table
    Normal,
    /// `MODIFIERKEY_*` code, `modifier` table
    Modifier,
    /// Key only active while Fn is held, `media` table
    Alternate,
}

/// A switch wired between two FPC pins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Key {
    /// Keycode identifier emitted verbatim into the header (e.g. `KEY_A`)
    pub name: String,
    /// Set when the scancode line carried the `FN` marker
    pub alternate: bool,
}

impl Key {
    /// Creates a normal (non-alternate) key.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alternate: false,
        }
    }

    /// Creates a key that is only active on the Fn layer.
    pub fn alternate(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alternate: true,
        }
    }

    /// Classifies the key. The `FN` marker wins over the name prefix.
    pub fn class(&self) -> KeyClass {
        if self.alternate {
            KeyClass::Alternate
        } else if self.name.starts_with(MODIFIER_PREFIX) {
            KeyClass::Modifier
        } else {
            KeyClass::Normal
        }
    }
}
