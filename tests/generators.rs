//! Proptest generators for finrel data structures
//!
//! Provides `Strategy` implementations for generating finite domains,
//! relation sets over them, and small graphs. Domains draw from single-digit
//! integers so the canonical key order coincides with numeric order, which
//! keeps expected values in tests easy to state.

#![allow(dead_code)] // each test binary uses a subset

use finrel::{Edge, Graph, Pair};
use indexmap::IndexSet;
use proptest::collection::vec;
use proptest::prelude::*;

// ============================================================================
// Domains
// ============================================================================

/// Generate a domain: a set of up to 7 single-digit naturals.
pub fn arb_domain() -> impl Strategy<Value = IndexSet<i64>> {
    vec(0i64..10, 0..7).prop_map(|elems| elems.into_iter().collect())
}

/// Generate a non-empty domain.
pub fn arb_nonempty_domain() -> impl Strategy<Value = IndexSet<i64>> {
    vec(0i64..10, 1..7).prop_map(|elems| elems.into_iter().collect())
}

// ============================================================================
// Relations
// ============================================================================

/// Generate a domain together with a relation set over domain × domain,
/// by masking the full Cartesian product.
pub fn arb_endorelation() -> impl Strategy<Value = (IndexSet<i64>, IndexSet<Pair<i64, i64>>)> {
    arb_domain().prop_flat_map(|domain| {
        let pairs: Vec<Pair<i64, i64>> = domain
            .iter()
            .flat_map(|&a| domain.iter().map(move |&b| Pair::new(a, b)))
            .collect();
        let count = pairs.len();

        (
            Just(domain),
            vec(any::<bool>(), count..=count).prop_map(move |mask| {
                pairs
                    .iter()
                    .zip(&mask)
                    .filter(|(_, keep)| **keep)
                    .map(|(p, _)| *p)
                    .collect()
            }),
        )
    })
}

/// Generate a (domain, codomain, relation set) triple with independent
/// endpoint sets.
pub fn arb_relation()
-> impl Strategy<Value = (IndexSet<i64>, IndexSet<i64>, IndexSet<Pair<i64, i64>>)> {
    (arb_domain(), arb_domain()).prop_flat_map(|(domain, codomain)| {
        let pairs: Vec<Pair<i64, i64>> = domain
            .iter()
            .flat_map(|&a| codomain.iter().map(move |&b| Pair::new(a, b)))
            .collect();
        let count = pairs.len();

        (
            Just(domain),
            Just(codomain),
            vec(any::<bool>(), count..=count).prop_map(move |mask| {
                pairs
                    .iter()
                    .zip(&mask)
                    .filter(|(_, keep)| **keep)
                    .map(|(p, _)| *p)
                    .collect()
            }),
        )
    })
}

// ============================================================================
// Graphs
// ============================================================================

/// Generate a simple undirected graph by masking the 2-subsets of a vertex
/// set.
pub fn arb_graph() -> impl Strategy<Value = Graph<i64>> {
    arb_domain().prop_flat_map(|vertices| {
        let elems: Vec<i64> = vertices.iter().copied().collect();
        let mut candidates = Vec::new();
        for (i, &u) in elems.iter().enumerate() {
            for &v in &elems[i + 1..] {
                candidates.push(Edge::new(u, v).expect("distinct by construction"));
            }
        }
        let count = candidates.len();

        vec(any::<bool>(), count..=count).prop_map(move |mask| {
            let edges: IndexSet<Edge<i64>> = candidates
                .iter()
                .zip(&mask)
                .filter(|(_, keep)| **keep)
                .map(|(e, _)| e.clone())
                .collect();
            Graph::new(vertices.clone(), edges)
        })
    })
}
