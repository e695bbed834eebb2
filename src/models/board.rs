//! Teensy board profiles and their FPC-to-I/O pin wiring.

use crate::models::Pin;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Teensy LC I/O numbers for FPC pins 1 through 26.
const TEENSYLC_PINS: [u8; 26] = [
    23, 0, 22, 1, 24, 2, 21, 3, 25, 4, 20, 5, 19, 6, 18, 7, 17, 8, 16, 9, 15, 10, 14, 11, 26, 12,
];

/// Teensy 3.2 I/O numbers for FPC pins 1 through 34.
const TEENSY32_PINS: [u8; 34] = [
    23, 0, 22, 1, 21, 2, 20, 3, 19, 4, 18, 5, 17, 6, 24, 7, 25, 8, 33, 9, 26, 10, 27, 11, 28, 12,
    32, 31, 30, 29, 16, 15, 14, 13,
];

/// Teensy 4.0 I/O numbers for FPC pins 1 through 34.
const TEENSY40_PINS: [u8; 34] = [
    23, 0, 22, 1, 21, 2, 20, 3, 19, 4, 18, 5, 17, 6, 29, 7, 31, 8, 33, 9, 32, 10, 30, 11, 28, 12,
    27, 26, 25, 24, 16, 15, 14, 13,
];

/// A microcontroller the matrix decoder board can be soldered to.
///
/// Each profile maps logical FPC pins (1-based) to the physical I/O number
/// on the Teensy. The names double as the directive lines accepted in a
/// scancode file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoardProfile {
    /// Teensy LC, 26 FPC pins
    #[default]
    #[serde(rename = "TEENSYLC")]
    TeensyLc,
    /// Teensy 3.2, 34 FPC pins
    #[serde(rename = "TEENSY32")]
    Teensy32,
    /// Teensy 4.0, 34 FPC pins
    #[serde(rename = "TEENSY40")]
    Teensy40,
}

impl BoardProfile {
    /// All known profiles, smallest first.
    pub const ALL: [Self; 3] = [Self::TeensyLc, Self::Teensy32, Self::Teensy40];

    /// Looks up a profile by name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_uppercase();
        Self::ALL.into_iter().find(|board| board.name() == name)
    }

    /// Canonical directive name (e.g. `TEENSY32`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::TeensyLc => "TEENSYLC",
            Self::Teensy32 => "TEENSY32",
            Self::Teensy40 => "TEENSY40",
        }
    }

    /// Physical I/O numbers ordered by logical FPC pin.
    pub const fn io_pins(self) -> &'static [u8] {
        match self {
            Self::TeensyLc => &TEENSYLC_PINS,
            Self::Teensy32 => &TEENSY32_PINS,
            Self::Teensy40 => &TEENSY40_PINS,
        }
    }

    /// Highest FPC pin that can be soldered to this board.
    pub fn max_pin(self) -> Pin {
        // Profiles hold at most 34 entries.
        Pin::try_from(self.io_pins().len()).unwrap_or(Pin::MAX)
    }

    /// Maps a 1-based FPC pin to its Teensy I/O number.
    ///
    /// Returns `None` for pin 0 and pins past the end of the profile.
    pub fn io_pin(self, pin: Pin) -> Option<u8> {
        let index = usize::try_from(pin).ok()?.checked_sub(1)?;
        self.io_pins().get(index).copied()
    }

    /// The smallest profile that has `pin` available, if any.
    pub fn smallest_fitting(pin: Pin) -> Option<Self> {
        Self::ALL.into_iter().find(|board| pin <= board.max_pin())
    }
}

impl fmt::Display for BoardProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|board| board.name()).collect();
            format!("Unknown board '{}'. Expected one of: {}", s, known.join(", "))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lengths() {
        assert_eq!(BoardProfile::TeensyLc.io_pins().len(), 26);
        assert_eq!(BoardProfile::Teensy32.io_pins().len(), 34);
        assert_eq!(BoardProfile::Teensy40.io_pins().len(), 34);
        assert_eq!(BoardProfile::Teensy32.max_pin(), 34);
    }

    #[test]
    fn test_default_is_teensy_lc() {
        assert_eq!(BoardProfile::default(), BoardProfile::TeensyLc);
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(
            BoardProfile::from_name("  teensy32 "),
            Some(BoardProfile::Teensy32)
        );
        assert_eq!(
            BoardProfile::from_name("TeensyLC"),
            Some(BoardProfile::TeensyLc)
        );
        assert_eq!(BoardProfile::from_name("TEENSY41"), None);
    }

    #[test]
    fn test_io_pin_is_one_based() {
        let board = BoardProfile::TeensyLc;
        assert_eq!(board.io_pin(0), None);
        assert_eq!(board.io_pin(1), Some(23));
        assert_eq!(board.io_pin(2), Some(0));
        assert_eq!(board.io_pin(26), Some(12));
        assert_eq!(board.io_pin(27), None);
    }

    #[test]
    fn test_boards_differ_past_pin_fourteen() {
        assert_eq!(BoardProfile::Teensy32.io_pin(15), Some(24));
        assert_eq!(BoardProfile::Teensy40.io_pin(15), Some(29));
    }

    #[test]
    fn test_smallest_fitting() {
        assert_eq!(
            BoardProfile::smallest_fitting(20),
            Some(BoardProfile::TeensyLc)
        );
        assert_eq!(
            BoardProfile::smallest_fitting(30),
            Some(BoardProfile::Teensy32)
        );
        assert_eq!(BoardProfile::smallest_fitting(35), None);
    }

    #[test]
    fn test_from_str_error_lists_boards() {
        let err = "ATMEGA".parse::<BoardProfile>().unwrap_err();
        assert!(err.contains("TEENSYLC, TEENSY32, TEENSY40"));
    }
}
