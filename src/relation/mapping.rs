//! Mappings: total, single-valued relations.

use indexmap::{IndexMap, IndexSet};

use crate::element::Element;
use crate::error::{Error, Result};
use crate::pair::Pair;

use super::{Relation, Relational, Sealed};

/// A total, single-valued relation — a function on a finite domain.
///
/// Invariant: every domain element heads exactly one pair of the relation
/// set, and the pair's second component is the element's image. The function
/// is materialized as a finite graph, so image queries are O(1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mapping<A: Element, B: Element> {
    domain: IndexSet<A>,
    codomain: IndexSet<B>,
    graph: IndexMap<A, B>,
    relation_set: IndexSet<Pair<A, B>>,
}

impl<A: Element, B: Element> Mapping<A, B> {
    /// Construct from a domain and a function. The codomain is the image of
    /// the domain, so the mapping is surjective by construction.
    pub fn new(domain: IndexSet<A>, function: impl Fn(&A) -> B) -> Self {
        let graph: IndexMap<A, B> = domain
            .iter()
            .map(|x| (x.clone(), function(x)))
            .collect();

        Self::from_graph(domain, graph.values().cloned().collect(), graph)
    }

    /// Construct from a domain, codomain and function.
    ///
    /// Fails with [`Error::InvalidCodomain`] if any image falls outside the
    /// supplied codomain.
    pub fn with_codomain(
        domain: IndexSet<A>,
        codomain: IndexSet<B>,
        function: impl Fn(&A) -> B,
    ) -> Result<Self> {
        let graph: IndexMap<A, B> = domain
            .iter()
            .map(|x| (x.clone(), function(x)))
            .collect();

        for (x, y) in &graph {
            if !codomain.contains(y) {
                return Err(Error::InvalidCodomain(format!(
                    "image {} of {} is outside the codomain",
                    y, x
                )));
            }
        }

        Ok(Self::from_graph(domain, codomain, graph))
    }

    /// Construct from a relation.
    ///
    /// Fails with [`Error::NotAMapping`] unless every element of the
    /// relation's domain heads exactly one pair.
    pub fn from_relation(relation: &Relation<A, B>) -> Result<Self> {
        let mut graph: IndexMap<A, B> = IndexMap::new();
        let mut heads: IndexMap<&A, usize> = IndexMap::new();

        for pair in relation.relation_set() {
            *heads.entry(&pair.a).or_insert(0) += 1;
            graph.insert(pair.a.clone(), pair.b.clone());
        }

        for x in relation.domain() {
            let count = heads.get(x).copied().unwrap_or(0);
            if count != 1 {
                return Err(Error::NotAMapping(format!(
                    "{} heads {} pairs, expected exactly one",
                    x, count
                )));
            }
        }

        Ok(Self::from_graph(
            relation.domain().clone(),
            relation.codomain().clone(),
            graph,
        ))
    }

    /// Construct from explicit (element, image) entries. The codomain is
    /// the set of images, as in [`Mapping::new`].
    pub fn from_entries(entries: IndexMap<A, B>) -> Self {
        Self::from_graph(
            entries.keys().cloned().collect(),
            entries.values().cloned().collect(),
            entries,
        )
    }

    /// Construct from explicit entries with a declared codomain.
    ///
    /// Fails with [`Error::InvalidCodomain`] if any entry value falls
    /// outside it.
    pub fn with_codomain_entries(codomain: IndexSet<B>, entries: IndexMap<A, B>) -> Result<Self> {
        for (x, y) in &entries {
            if !codomain.contains(y) {
                return Err(Error::InvalidCodomain(format!(
                    "image {} of {} is outside the codomain",
                    y, x
                )));
            }
        }

        Ok(Self::from_graph(
            entries.keys().cloned().collect(),
            codomain,
            entries,
        ))
    }

    fn from_graph(domain: IndexSet<A>, codomain: IndexSet<B>, graph: IndexMap<A, B>) -> Self {
        let relation_set = graph
            .iter()
            .map(|(x, y)| Pair::new(x.clone(), y.clone()))
            .collect();

        Self {
            domain,
            codomain,
            graph,
            relation_set,
        }
    }

    /// Whether this mapping sends `x` to `y`.
    pub fn maps(&self, x: &A, y: &B) -> bool {
        self.graph.get(x) == Some(y)
    }

    /// The image of a single domain element.
    ///
    /// Fails with [`Error::NotInDomain`] for a foreign element.
    pub fn image_of(&self, x: &A) -> Result<B> {
        self.graph
            .get(x)
            .cloned()
            .ok_or_else(|| Error::NotInDomain(format!("{} is not in the domain", x)))
    }

    /// The image of a subset of the domain.
    ///
    /// Fails with [`Error::NotASubset`] if `subset` is not contained in the
    /// domain.
    pub fn image_of_set(&self, subset: &IndexSet<A>) -> Result<IndexSet<B>> {
        if let Some(stray) = subset.iter().find(|x| !self.domain.contains(*x)) {
            return Err(Error::NotASubset(format!(
                "{} is not in the domain",
                stray
            )));
        }

        subset.iter().map(|x| self.image_of(x)).collect()
    }

    /// Compose with a second mapping: `after ∘ self`.
    ///
    /// Fails with [`Error::InvalidCodomain`] unless this codomain is
    /// contained in `after`'s domain — strict inclusion is legal, so a
    /// larger target domain composes fine. The result has this domain and
    /// `after`'s codomain.
    pub fn compose<C: Element>(&self, after: &Mapping<B, C>) -> Result<Mapping<A, C>> {
        if let Some(stray) = self
            .codomain
            .iter()
            .find(|y| !after.domain.contains(*y))
        {
            return Err(Error::InvalidCodomain(format!(
                "codomain element {} is outside the domain of the second mapping",
                stray
            )));
        }

        let graph: IndexMap<A, C> = self
            .graph
            .iter()
            .map(|(x, y)| {
                let z = after
                    .graph
                    .get(y)
                    .expect("codomain inclusion was just validated");
                (x.clone(), z.clone())
            })
            .collect();

        Ok(Mapping::from_graph(
            self.domain.clone(),
            after.codomain.clone(),
            graph,
        ))
    }
}

impl<A: Element> Mapping<A, A> {
    /// The identity mapping on a domain.
    pub fn identity(domain: IndexSet<A>) -> Self {
        Self::new(domain, |x| x.clone())
    }
}

impl<A: Element, B: Element> Mapping<A, B> {
    /// The constant mapping sending every domain element to `value`.
    pub fn constant(domain: IndexSet<A>, value: B) -> Self {
        Self::new(domain, |_| value.clone())
    }

    /// First-component projection on a domain of pairs.
    pub fn project_left(domain: IndexSet<Pair<A, B>>) -> Mapping<Pair<A, B>, A> {
        Mapping::new(domain, |p| p.a.clone())
    }

    /// Second-component projection on a domain of pairs.
    pub fn project_right(domain: IndexSet<Pair<A, B>>) -> Mapping<Pair<A, B>, B> {
        Mapping::new(domain, |p| p.b.clone())
    }

    /// Component swap on a domain of pairs.
    pub fn swap(domain: IndexSet<Pair<A, B>>) -> Mapping<Pair<A, B>, Pair<B, A>> {
        Mapping::new(domain, |p| p.clone().flip())
    }
}

impl<A: Element, B: Element> Sealed for Mapping<A, B> {}

impl<A: Element, B: Element> Relational<A, B> for Mapping<A, B> {
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
