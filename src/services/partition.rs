//! Row/column inference for the scan matrix.
//!
//! The scancode file only says which two pins each switch bridges; it does
//! not say which side is the row. Real keyboard matrices have far fewer rows
//! than columns on one side of the connector, and every row pin touches many
//! switches, so the highest-degree pins are taken as rows first.

use crate::models::{ConnectionGraph, Key, Partition, Pin};
use std::cmp::Reverse;
use std::collections::BTreeSet;
use tracing::debug;

/// Splits the graph's pins into rows and columns.
///
/// Pins are visited by descending connection count. Among pins with the
/// same count, pins with more decimal digits go first, then ascending pin
/// order, so `10` is visited before `9`. Each pin not yet eliminated becomes
/// a row and eliminates every pin it connects to. Columns are all neighbors
/// of the chosen rows.
///
/// An empty graph yields an empty partition; callers decide whether that
/// is an error.
pub fn partition(graph: &ConnectionGraph) -> Partition {
    let mut candidates: Vec<Pin> = graph.pins().collect();
    candidates.sort_by_key(|&pin| {
        (
            Reverse(graph.degree(pin)),
            Reverse(digit_count(pin)),
            pin,
        )
    });

    let mut eliminated = BTreeSet::new();
    let mut rows = Vec::new();
    for pin in candidates {
        if eliminated.contains(&pin) {
            continue;
        }
        debug!(pin, degree = graph.degree(pin), "selected row pin");
        rows.push(pin);
        eliminated.extend(graph.neighbors(pin));
    }
    rows.sort_unstable();

    let columns: BTreeSet<Pin> = rows.iter().flat_map(|&row| graph.neighbors(row)).collect();

    Partition {
        rows,
        columns: columns.into_iter().collect(),
    }
}

fn digit_count(pin: Pin) -> u32 {
    pin.checked_ilog10().map_or(1, |log| log + 1)
}

/// Keys whose pins were both assigned to columns.
///
/// Such a switch has no row to be scanned from and is left out of every
/// table.
pub fn orphaned_keys<'a>(
    graph: &'a ConnectionGraph,
    partition: &Partition,
) -> Vec<(Pin, Pin, &'a Key)> {
    graph
        .keys()
        .filter(|&(a, b, _)| partition.is_column(a) && partition.is_column(b))
        .collect()
}
