//! Row/column split of the FPC pins.

use crate::models::Pin;
use serde::Serialize;

/// Pins assigned to matrix rows and columns, each list ascending.
///
/// Row and column sets are disjoint. Matrix row `i` is `rows[i]` and matrix
/// column `j` is `columns[j]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Partition {
    /// Row (input) pins
    pub rows: Vec<Pin>,
    /// Column (output) pins
    pub columns: Vec<Pin>,
}

impl Partition {
    /// `MATRIX_ROWS`
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// `MATRIX_COLS`
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True if the pin was assigned to the column set.
    pub fn is_column(&self, pin: Pin) -> bool {
        self.columns.binary_search(&pin).is_ok()
    }

    /// Matrix coordinates of the switch between two pins, if one is a row
    /// and the other a column.
    pub fn position(&self, a: Pin, b: Pin) -> Option<(usize, usize)> {
        let lookup = |row: Pin, col: Pin| {
            Some((
                self.rows.binary_search(&row).ok()?,
                self.columns.binary_search(&col).ok()?,
            ))
        };
        lookup(a, b).or_else(|| lookup(b, a))
    }

    /// Sorted union of row and column pins.
    pub fn all_pins(&self) -> Vec<Pin> {
        let mut pins: Vec<Pin> = self.rows.iter().chain(&self.columns).copied().collect();
        pins.sort_unstable();
        pins.dedup();
        pins
    }
}
