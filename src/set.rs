//! Finite-set algebra.
//!
//! The primitives the relational core consumes: union, intersection,
//! difference, Cartesian product, power set, k-combinations, and a handful
//! of constructors for common domains. Sets are `IndexSet`s — equality is
//! order-insensitive, iteration is deterministic for a given construction
//! history, and the canonical order (see [`crate::element`]) is established
//! by key sort whenever a set has to become a sequence.

use indexmap::IndexSet;
use itertools::Itertools;

use crate::element::{self, Element};
use crate::error::{Error, Result};
use crate::pair::Pair;

/// A ∪ B.
pub fn union<A: Element>(a: &IndexSet<A>, b: &IndexSet<A>) -> IndexSet<A> {
    a.iter().chain(b.iter()).cloned().collect()
}

/// A ∩ B.
pub fn intersection<A: Element>(a: &IndexSet<A>, b: &IndexSet<A>) -> IndexSet<A> {
    a.iter().filter(|x| b.contains(*x)).cloned().collect()
}

/// A \ B.
pub fn difference<A: Element>(a: &IndexSet<A>, b: &IndexSet<A>) -> IndexSet<A> {
    a.iter().filter(|x| !b.contains(*x)).cloned().collect()
}

/// Cartesian product A × B as a set of ordered pairs.
pub fn product<A: Element, B: Element>(a: &IndexSet<A>, b: &IndexSet<B>) -> IndexSet<Pair<A, B>> {
    let mut out = IndexSet::new();
    for x in a {
        for y in b {
            out.insert(Pair::new(x.clone(), y.clone()));
        }
    }
    out
}

/// The identity relation {(x, x) : x ∈ A}.
pub fn identity_pairs<A: Element>(a: &IndexSet<A>) -> IndexSet<Pair<A, A>> {
    a.iter().map(|x| Pair::new(x.clone(), x.clone())).collect()
}

/// All subsets of `set`, in canonical order (by size, then lexicographically
/// over the canonical linearization).
pub fn power_set<A: Element>(set: &IndexSet<A>) -> Vec<IndexSet<A>> {
    element::sorted(set)
        .into_iter()
        .powerset()
        .map(IndexSet::from_iter)
        .collect()
}

/// All k-element subsets of `set`, in canonical order.
///
/// Fails with [`Error::InvalidChoose`] when `k` exceeds the set size.
pub fn choose<A: Element>(set: &IndexSet<A>, k: usize) -> Result<Vec<IndexSet<A>>> {
    if k > set.len() {
        return Err(Error::InvalidChoose { k, size: set.len() });
    }

    Ok(element::sorted(set)
        .into_iter()
        .combinations(k)
        .map(IndexSet::from_iter)
        .collect())
}

/// The integers in `lo..hi`.
pub fn integers(lo: i64, hi: i64) -> IndexSet<i64> {
    (lo..hi).collect()
}

/// The naturals 0..n.
pub fn naturals(n: i64) -> IndexSet<i64> {
    integers(0, n)
}
