//! The relational core.
//!
//! A relation over finite sets is a set of ordered pairs drawn from
//! domain × codomain. The [`Relational`] capability has exactly three
//! realizations:
//!
//! - [`Relation`] — arbitrary pairs, constructed from a predicate, a raw
//!   pair set, or an explicit (domain, codomain, pair-set) triple
//! - [`Mapping`] — total, single-valued (a function), with image queries
//!   and composition
//! - [`Ordering`] — reflexive, antisymmetric, transitive over a single
//!   domain (a poset), built from a covering relation or a comparator
//!
//! The trait is sealed: pattern-matching consumers can rely on the set of
//! kinds being closed.
//!
//! # Architecture
//!
//! - **closure**: reflexive/transitive closure and pair-set ↔
//!   adjacency-matrix conversion (boolean Floyd–Warshall)
//! - **validate**: standalone order/function axiom predicates, usable on any
//!   `(domain, relation set)` pair regardless of how it was built

pub mod closure;
mod mapping;
mod ordering;
mod relation;
pub mod validate;

pub use mapping::Mapping;
pub use ordering::Ordering;
pub use relation::Relation;

use indexmap::IndexSet;

use crate::element::Element;
use crate::matrix::Matrix;
use crate::pair::Pair;

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// Shared capability of the three relational kinds.
///
/// Invariant: every pair in `relation_set()` has its first component in
/// `domain()` and its second in `codomain()`.
pub trait Relational<A: Element, B: Element>: sealed::Sealed {
    fn domain(&self) -> &IndexSet<A>;

    fn codomain(&self) -> &IndexSet<B>;

    fn relation_set(&self) -> &IndexSet<Pair<A, B>>;

    /// Whether `a` is related to `b`. Amortized O(1).
    fn relates(&self, a: &A, b: &B) -> bool {
        self.relation_set()
            .contains(&Pair::new(a.clone(), b.clone()))
    }

    /// Number of related pairs.
    fn size(&self) -> usize {
        self.relation_set().len()
    }

    fn is_empty(&self) -> bool {
        self.relation_set().is_empty()
    }

    /// The boolean adjacency matrix of this relation, rows and columns in
    /// canonical key order and labeled accordingly.
    fn adjacency_matrix(&self) -> Matrix {
        closure::adjacency_matrix(self.domain(), self.codomain(), self.relation_set())
    }
}
