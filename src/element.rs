//! Element identity and canonical linearization.
//!
//! Every type used as a set member or relation endpoint must support
//! equality/hash-equivalence and a deterministic string key. The key induces
//! one canonical linear order, used everywhere a set has to become an
//! indexable sequence (building an adjacency matrix, labeling it, ordering
//! undirected edge endpoints). Two runs over logically equal sets produce
//! the same linearization; iteration order of the backing set container is
//! never relied on.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use indexmap::IndexSet;

/// Capability bound for set members and relation endpoints.
///
/// `key` is the stable string projection establishing the canonical order.
/// The default (the `Display` rendering) is almost always right; it only
/// needs overriding when two distinct values would render identically.
pub trait Element: Clone + Eq + Hash + Debug + Display {
    /// Stable key used to linearize sets into sequences.
    fn key(&self) -> String {
        self.to_string()
    }
}

impl<T: Clone + Eq + Hash + Debug + Display> Element for T {}

/// Linearize a set into the canonical key order.
pub fn sorted<A: Element>(set: &IndexSet<A>) -> Vec<A> {
    let mut elems: Vec<A> = set.iter().cloned().collect();
    elems.sort_by_cached_key(|e| e.key());
    elems
}

/// Key projections of a sequence, in order. Used as matrix labels.
pub fn labels<A: Element>(elems: &[A]) -> Vec<String> {
    elems.iter().map(|e| e.key()).collect()
}
