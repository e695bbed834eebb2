//! Undirected pin connection graph.

use crate::models::{Key, Pin};
use std::collections::BTreeMap;

/// Every switch in the scancode file, stored as edges between FPC pins.
///
/// Each edge is recorded in both directions, so `key_between(a, b)` and
/// `key_between(b, a)` always return the same key. Ordered maps keep
/// iteration deterministic (ascending pin order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionGraph {
    adjacency: BTreeMap<Pin, BTreeMap<Pin, Key>>,
}

impl ConnectionGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wires `key` between two pins, replacing any key already on that pair.
    ///
    /// Returns the replaced key, if any.
    pub fn connect(&mut self, a: Pin, b: Pin, key: Key) -> Option<Key> {
        self.adjacency.entry(b).or_default().insert(a, key.clone());
        self.adjacency.entry(a).or_default().insert(b, key)
    }

    /// Key on the edge between two pins, in either order.
    pub fn key_between(&self, a: Pin, b: Pin) -> Option<&Key> {
        self.adjacency.get(&a)?.get(&b)
    }

    /// Pins connected to `pin`, ascending.
    pub fn neighbors(&self, pin: Pin) -> impl Iterator<Item = Pin> + '_ {
        self.adjacency
            .get(&pin)
            .into_iter()
            .flat_map(|edges| edges.keys().copied())
    }

    /// Number of distinct pins connected to `pin`.
    pub fn degree(&self, pin: Pin) -> usize {
        self.adjacency.get(&pin).map_or(0, BTreeMap::len)
    }

    /// All pins with at least one connection, ascending.
    pub fn pins(&self) -> impl Iterator<Item = Pin> + '_ {
        self.adjacency.keys().copied()
    }

    /// Each connection once, as `(lower pin, higher pin, key)`.
    pub fn keys(&self) -> impl Iterator<Item = (Pin, Pin, &Key)> + '_ {
        self.adjacency.iter().flat_map(|(&a, edges)| {
            edges
                .range(a.saturating_add(1)..)
                .map(move |(&b, key)| (a, b, key))
        })
    }

    /// Number of pins in the graph.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// True when no keys have been wired.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
