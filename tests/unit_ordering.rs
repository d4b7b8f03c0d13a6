//! Unit tests for poset construction

use finrel::{validate, Error, Ordering, Pair, Relational};
use indexmap::{IndexMap, IndexSet};

fn pairs(list: &[(i64, i64)]) -> IndexSet<Pair<i64, i64>> {
    list.iter().map(|&(a, b)| Pair::new(a, b)).collect()
}

#[test]
fn test_from_comparator_linear_order() {
    // Insertion order deliberately scrambled
    let poset = Ordering::from_comparator(IndexSet::from([3i64, 1, 2]), |a, b| a.cmp(b)).unwrap();

    assert_eq!(poset.covering_relation(), &pairs(&[(1, 2), (2, 3)]));
    assert_eq!(
        poset.relation_set(),
        &pairs(&[(1, 1), (2, 2), (3, 3), (1, 2), (2, 3), (1, 3)])
    );
    assert!(validate::is_ordering(poset.domain(), poset.relation_set()));
}

#[test]
fn test_from_comparator_rejects_inconsistent() {
    // A comparator that never returns Greater cannot produce an inversion,
    // so it passes the scan even though it is degenerate
    let degenerate = Ordering::from_comparator(IndexSet::from([1i64, 2, 3]), |a, b| {
        if a == b {
            std::cmp::Ordering::Equal
        } else {
            std::cmp::Ordering::Less
        }
    });
    assert!(degenerate.is_ok());

    let err = Ordering::from_comparator(IndexSet::from([1i64, 2, 3]), |a, b| {
        if a == b {
            std::cmp::Ordering::Equal
        } else {
            std::cmp::Ordering::Greater
        }
    })
    .unwrap_err();
    assert_eq!(err, Error::InvalidComparator);
}

#[test]
fn test_from_comparator_singleton_and_empty() {
    let single = Ordering::from_comparator(IndexSet::from([7i64]), |a, b| a.cmp(b)).unwrap();
    assert!(single.covering_relation().is_empty());
    assert_eq!(single.relation_set(), &pairs(&[(7, 7)]));

    let empty = Ordering::from_comparator(IndexSet::<i64>::new(), |a, b| a.cmp(b)).unwrap();
    assert!(empty.relation_set().is_empty());
}

#[test]
fn test_from_hasse_diamond() {
    // 1 covers to {2, 3}, both cover to 4
    let hasse = IndexMap::from([
        (1i64, IndexSet::from([2i64, 3])),
        (2, IndexSet::from([4i64])),
        (3, IndexSet::from([4i64])),
    ]);
    let poset = Ordering::from_hasse(hasse);

    assert_eq!(poset.domain(), &IndexSet::from([1i64, 2, 3, 4]));
    assert_eq!(
        poset.covering_relation(),
        &pairs(&[(1, 2), (1, 3), (2, 4), (3, 4)])
    );
    assert_eq!(
        poset.relation_set(),
        &pairs(&[
            (1, 1),
            (2, 2),
            (3, 3),
            (4, 4),
            (1, 2),
            (1, 3),
            (2, 4),
            (3, 4),
            (1, 4)
        ])
    );
    assert!(validate::is_ordering(poset.domain(), poset.relation_set()));

    // 2 and 3 are incomparable
    assert!(!poset.relates(&2, &3));
    assert!(!poset.relates(&3, &2));
}

#[test]
fn test_from_hasse_cycle_violates_antisymmetry() {
    // The Hasse path performs no acyclicity check: the closure of a cyclic
    // covering relation terminates, and the result fails antisymmetry.
    let hasse = IndexMap::from([
        (1i64, IndexSet::from([2i64])),
        (2, IndexSet::from([3i64])),
        (3, IndexSet::from([1i64])),
    ]);
    let not_a_poset = Ordering::from_hasse(hasse);

    assert!(validate::reflexivity(not_a_poset.domain(), not_a_poset.relation_set()));
    assert!(validate::transitivity(not_a_poset.relation_set()));
    assert!(!validate::antisymmetry(not_a_poset.relation_set()));
    assert!(!validate::is_ordering(not_a_poset.domain(), not_a_poset.relation_set()));
}

#[test]
fn test_ordering_codomain_is_domain() {
    let poset = Ordering::from_comparator(IndexSet::from([1i64, 2]), |a, b| a.cmp(b)).unwrap();
    assert_eq!(poset.domain(), poset.codomain());
}
