//! Order- and function-axiom validators.
//!
//! Pure predicates over a borrowed `(domain, relation set)` pair, usable on
//! any relation regardless of which construction path (if any) produced it
//! — callers can audit arbitrary pair sets for axiom compliance.

use std::collections::HashMap;

use indexmap::IndexSet;

use crate::element::Element;
use crate::pair::Pair;

/// Every domain element is related to itself.
pub fn reflexivity<A: Element>(domain: &IndexSet<A>, relation_set: &IndexSet<Pair<A, A>>) -> bool {
    domain
        .iter()
        .all(|x| relation_set.contains(&Pair::new(x.clone(), x.clone())))
}

/// `(a, b)` present implies `(b, a)` present.
pub fn symmetry<A: Element>(relation_set: &IndexSet<Pair<A, A>>) -> bool {
    relation_set
        .iter()
        .all(|p| relation_set.contains(&Pair::new(p.b.clone(), p.a.clone())))
}

/// No distinct `a`, `b` are related in both directions.
pub fn antisymmetry<A: Element>(relation_set: &IndexSet<Pair<A, A>>) -> bool {
    relation_set
        .iter()
        .filter(|p| p.a != p.b)
        .all(|p| !relation_set.contains(&Pair::new(p.b.clone(), p.a.clone())))
}

/// `(a, b)` and `(b, c)` present implies `(a, c)` present.
pub fn transitivity<A: Element>(relation_set: &IndexSet<Pair<A, A>>) -> bool {
    relation_set.iter().all(|p| {
        relation_set
            .iter()
            .filter(|q| p.b == q.a)
            .all(|q| relation_set.contains(&Pair::new(p.a.clone(), q.b.clone())))
    })
}

/// The partial-order conjunction: reflexive, antisymmetric and transitive
/// over the domain.
pub fn is_ordering<A: Element>(domain: &IndexSet<A>, relation_set: &IndexSet<Pair<A, A>>) -> bool {
    reflexivity(domain, relation_set)
        && antisymmetry(relation_set)
        && transitivity(relation_set)
}

/// Every domain element heads exactly one pair — the relation is a total,
/// single-valued function.
pub fn is_single_valued<A: Element, B: Element>(
    domain: &IndexSet<A>,
    relation_set: &IndexSet<Pair<A, B>>,
) -> bool {
    let mut heads: HashMap<&A, usize> = HashMap::new();
    for pair in relation_set {
        *heads.entry(&pair.a).or_insert(0) += 1;
    }

    domain.iter().all(|x| heads.get(x).copied() == Some(1))
}

/// Every image of the domain under `function` lies in the codomain.
pub fn codomain_contains<A: Element, B: Element>(
    domain: &IndexSet<A>,
    codomain: &IndexSet<B>,
    function: impl Fn(&A) -> B,
) -> bool {
    domain.iter().all(|x| codomain.contains(&function(x)))
}

/// `subset ⊆ set`.
pub fn is_subset<A: Element>(subset: &IndexSet<A>, set: &IndexSet<A>) -> bool {
    subset.iter().all(|x| set.contains(x))
}

/// The comparator agrees with the adjacent order of an already-sorted
/// sequence — no inversions.
pub fn comparator_consistent<A>(
    sorted: &[A],
    comparator: impl Fn(&A, &A) -> std::cmp::Ordering,
) -> bool {
    sorted
        .windows(2)
        .all(|w| comparator(&w[0], &w[1]) != std::cmp::Ordering::Greater)
}
