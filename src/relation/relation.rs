//! General binary relations.

use indexmap::IndexSet;

use crate::element::Element;
use crate::pair::Pair;
use crate::set;

use super::{Relational, Sealed};

/// An arbitrary binary relation between two finite sets.
///
/// No invariant beyond pair containment: any subset of domain × codomain is
/// a valid relation set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation<A: Element, B: Element> {
    domain: IndexSet<A>,
    codomain: IndexSet<B>,
    relation_set: IndexSet<Pair<A, B>>,
}

impl<A: Element, B: Element> Relation<A, B> {
    /// Construct from a predicate: the pairs of domain × codomain on which
    /// it holds. Costs O(|domain| · |codomain|) predicate evaluations.
    pub fn from_predicate(
        domain: IndexSet<A>,
        codomain: IndexSet<B>,
        predicate: impl Fn(&A, &B) -> bool,
    ) -> Self {
        let relation_set = set::product(&domain, &codomain)
            .into_iter()
            .filter(|pair| predicate(&pair.a, &pair.b))
            .collect();

        Self {
            domain,
            codomain,
            relation_set,
        }
    }

    /// Construct from a pair set alone. Domain and codomain are the
    /// projections onto first and second components — the smallest sets
    /// consistent with the given pairs.
    pub fn from_pairs(relation_set: IndexSet<Pair<A, B>>) -> Self {
        let domain = relation_set.iter().map(|p| p.a.clone()).collect();
        let codomain = relation_set.iter().map(|p| p.b.clone()).collect();

        Self {
            domain,
            codomain,
            relation_set,
        }
    }

    /// Construct from an explicit (domain, codomain, pair-set) triple.
    ///
    /// The pair set is trusted to respect domain/codomain containment;
    /// a violation is a caller contract error, checked in debug builds only.
    pub fn new(
        domain: IndexSet<A>,
        codomain: IndexSet<B>,
        relation_set: IndexSet<Pair<A, B>>,
    ) -> Self {
        debug_assert!(
            relation_set
                .iter()
                .all(|p| domain.contains(&p.a) && codomain.contains(&p.b)),
            "relation pair outside the declared domain or codomain"
        );

        Self {
            domain,
            codomain,
            relation_set,
        }
    }

    /// The inverse relation: every pair flipped, domain and codomain
    /// swapped.
    pub fn inverse(&self) -> Relation<B, A> {
        Relation {
            domain: self.codomain.clone(),
            codomain: self.domain.clone(),
            relation_set: self
                .relation_set
                .iter()
                .cloned()
                .map(Pair::flip)
                .collect(),
        }
    }
}

impl<A: Element, B: Element> Sealed for Relation<A, B> {}

impl<A: Element, B: Element> Relational<A, B> for Relation<A, B> {
    fn domain(&self) -> &IndexSet<A> {
        &self.domain
    }

    fn codomain(&self) -> &IndexSet<B> {
        &self.codomain
    }

    fn relation_set(&self) -> &IndexSet<Pair<A, B>> {
        &self.relation_set
    }
}
