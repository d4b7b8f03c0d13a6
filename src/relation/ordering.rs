//! Partial orders (posets).

use indexmap::{IndexMap, IndexSet};

use crate::element::Element;
use crate::error::{Error, Result};
use crate::pair::Pair;

use super::{closure, validate, Relational, Sealed};

/// A partial order: a reflexive, antisymmetric, transitive relation over a
/// single domain (domain = codomain).
///
/// Carries the covering relation it was built from — the minimal pair set
/// whose reflexive-transitive closure is the full relation set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ordering<A: Element> {
    domain: IndexSet<A>,
    covering_relation: IndexSet<Pair<A, A>>,
    relation_set: IndexSet<Pair<A, A>>,
}

impl<A: Element> Ordering<A> {
    /// Construct from a covering relation given as a Hasse diagram: each
    /// element mapped to its set of direct successors.
    ///
    /// The domain is the union of all keys and successors; the relation set
    /// is the reflexive-transitive closure of the flattened (key, successor)
    /// pairs. No acyclicity check is performed here: the closure of a cyclic
    /// covering relation still terminates, but the result fails the
    /// [`validate::antisymmetry`] predicate — audit with
    /// [`validate::is_ordering`] when the input is untrusted.
    pub fn from_hasse(hasse: IndexMap<A, IndexSet<A>>) -> Self {
        let mut domain = IndexSet::new();
        let mut covering_relation = IndexSet::new();

        for (below, successors) in &hasse {
            domain.insert(below.clone());
            for above in successors {
                domain.insert(above.clone());
                covering_relation.insert(Pair::new(below.clone(), above.clone()));
            }
        }

        let relation_set =
            closure::reflexive(&domain, &closure::transitive(&domain, &covering_relation));

        Self {
            domain,
            covering_relation,
            relation_set,
        }
    }

    /// Construct a linear order from a total-order comparator.
    ///
    /// The domain is sorted by the comparator and the sorted sequence is
    /// re-checked against it; any inversion fails with
    /// [`Error::InvalidComparator`]. The covering relation is the chain of
    /// adjacent sorted pairs, so this path always produces a linear order.
    pub fn from_comparator(
        domain: IndexSet<A>,
        comparator: impl Fn(&A, &A) -> std::cmp::Ordering,
    ) -> Result<Self> {
        let mut sorted: Vec<A> = domain.iter().cloned().collect();
        sort_by_comparator(&mut sorted, &comparator);

        if !validate::comparator_consistent(&sorted, &comparator) {
            return Err(Error::InvalidComparator);
        }

        let covering_relation: IndexSet<Pair<A, A>> = sorted
            .windows(2)
            .map(|w| Pair::new(w[0].clone(), w[1].clone()))
            .collect();

        let relation_set =
            closure::reflexive(&domain, &closure::transitive(&domain, &covering_relation));

        Ok(Self {
            domain,
            covering_relation,
            relation_set,
        })
    }

    /// The covering relation this order was constructed from.
    pub fn covering_relation(&self) -> &IndexSet<Pair<A, A>> {
        &self.covering_relation
    }
}

/// Insertion sort by an arbitrary comparator.
///
/// The std slice sorts abort on comparators that are not total orders —
/// exactly the inputs the comparator construction path has to turn into an
/// error — so the sort here must terminate on any comparator and leave the
/// inversion scan to decide validity.
fn sort_by_comparator<A>(items: &mut [A], comparator: &impl Fn(&A, &A) -> std::cmp::Ordering) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && comparator(&items[j - 1], &items[j]) == std::cmp::Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

impl<A: Element> Sealed for Ordering<A> {}

impl<A: Element> Relational<A, A> for Ordering<A> {
    fn domain(&self) -> &IndexSet<A> {
        &self.domain
    }

    /// For an ordering the codomain is the domain.
    fn codomain(&self) -> &IndexSet<A> {
        &self.domain
    }

    fn relation_set(&self) -> &IndexSet<Pair<A, A>> {
        &self.relation_set
    }
}
