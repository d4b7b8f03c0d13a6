//! Undirected simple graphs.
//!
//! A thin container over the set algebra: vertices plus a set of unordered
//! edges with no self-loops. Shape constructors (complete, star, path,
//! cycle) consume `set::choose` and the generic set operations only — the
//! closure engine is never involved.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::set;

/// An undirected edge: an unordered pair of distinct endpoints.
///
/// Endpoints are stored in canonical order, so `Edge::new(u, v)` and
/// `Edge::new(v, u)` are equal values. Displays as `{u, v}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge<A: Element> {
    u: A,
    v: A,
}

impl<A: Element> Edge<A> {
    /// Construct an edge between two distinct vertices.
    ///
    /// Fails with [`Error::InvalidEdge`] when `u == v`: simple graphs have
    /// no self-loops.
    pub fn new(u: A, v: A) -> Result<Self> {
        if u == v {
            return Err(Error::InvalidEdge(format!("self-loop on {}", u)));
        }

        // Canonical endpoint order: key order, hash tie-break for distinct
        // values sharing a key. DefaultHasher is fixed-key, so the order is
        // stable across runs.
        let swap = match u.key().cmp(&v.key()) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Equal => stable_hash(&u) > stable_hash(&v),
            std::cmp::Ordering::Less => false,
        };

        let (u, v) = if swap { (v, u) } else { (u, v) };
        Ok(Self { u, v })
    }

    pub fn u(&self) -> &A {
        &self.u
    }

    pub fn v(&self) -> &A {
        &self.v
    }

    /// Whether `x` is one of the endpoints.
    pub fn incident_to(&self, x: &A) -> bool {
        self.u == *x || self.v == *x
    }

    /// The endpoint opposite `x`, if `x` is an endpoint.
    pub fn other(&self, x: &A) -> Option<&A> {
        if self.u == *x {
            Some(&self.v)
        } else if self.v == *x {
            Some(&self.u)
        } else {
            None
        }
    }
}

/// Collect a vertex list into a set, rejecting repeats.
fn distinct<A: Element>(vertices: &[A]) -> Result<IndexSet<A>> {
    let mut set = IndexSet::new();
    for v in vertices {
        if !set.insert(v.clone()) {
            return Err(Error::DuplicateVertex(v.to_string()));
        }
    }
    Ok(set)
}

fn stable_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

impl<A: Element> fmt::Display for Edge<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.u, self.v)
    }
}

/// An undirected simple graph: a vertex set and a set of edges between
/// distinct vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<A: Element> {
    vertices: IndexSet<A>,
    edges: IndexSet<Edge<A>>,
}

impl<A: Element> Graph<A> {
    /// Construct from explicit vertex and edge sets. Edge endpoints are
    /// trusted to lie in the vertex set; a violation is a caller contract
    /// error, checked in debug builds only.
    pub fn new(vertices: IndexSet<A>, edges: IndexSet<Edge<A>>) -> Self {
        debug_assert!(
            edges
                .iter()
                .all(|e| vertices.contains(&e.u) && vertices.contains(&e.v)),
            "edge endpoint outside the vertex set"
        );

        Self { vertices, edges }
    }

    /// Construct from edges alone; the vertex set is the endpoints, so the
    /// resulting graph has no isolated vertices.
    pub fn from_edges(edges: IndexSet<Edge<A>>) -> Self {
        let vertices = edges
            .iter()
            .flat_map(|e| [e.u.clone(), e.v.clone()])
            .collect();

        Self { vertices, edges }
    }

    /// The complete graph: every pair of distinct vertices adjacent.
    ///
    /// Fails with [`Error::TooFewVertices`] on fewer than 2 vertices.
    pub fn complete(vertices: IndexSet<A>) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(Error::TooFewVertices {
                required: 2,
                found: vertices.len(),
            });
        }

        let edges = set::choose(&vertices, 2)?
            .into_iter()
            .map(|pair| {
                let mut endpoints = pair.into_iter();
                let u = endpoints.next().expect("2-subset has a first element");
                let v = endpoints.next().expect("2-subset has a second element");
                Edge::new(u, v).expect("2-subset endpoints are distinct")
            })
            .collect();

        Ok(Self { vertices, edges })
    }

    /// The star graph: `centre` adjacent to every other vertex, and no
    /// other edges.
    ///
    /// Fails with [`Error::NotInDomain`] when the centre is not a vertex.
    pub fn star(vertices: IndexSet<A>, centre: A) -> Result<Self> {
        if !vertices.contains(&centre) {
            return Err(Error::NotInDomain(format!(
                "centre {} is not in the vertex set",
                centre
            )));
        }

        let edges = vertices
            .iter()
            .filter(|v| **v != centre)
            .map(|v| Edge::new(centre.clone(), v.clone()).expect("centre was filtered out"))
            .collect();

        Ok(Self { vertices, edges })
    }

    /// The path graph along a vertex list: an edge between each two
    /// consecutive vertices.
    ///
    /// Fails with [`Error::DuplicateVertex`] on a repeated vertex and
    /// [`Error::TooFewVertices`] on fewer than 2.
    pub fn path(vertices: Vec<A>) -> Result<Self> {
        let vertex_set = distinct(&vertices)?;
        if vertices.len() < 2 {
            return Err(Error::TooFewVertices {
                required: 2,
                found: vertices.len(),
            });
        }

        let edges = vertices
            .windows(2)
            .map(|w| Edge::new(w[0].clone(), w[1].clone()).expect("list vertices are distinct"))
            .collect();

        Ok(Self {
            vertices: vertex_set,
            edges,
        })
    }

    /// The cycle graph along a vertex list: a path plus the closing edge
    /// from the last vertex back to the first.
    ///
    /// Fails with [`Error::DuplicateVertex`] on a repeated vertex and
    /// [`Error::TooFewVertices`] on fewer than 3.
    pub fn cycle(vertices: Vec<A>) -> Result<Self> {
        let vertex_set = distinct(&vertices)?;
        if vertices.len() < 3 {
            return Err(Error::TooFewVertices {
                required: 3,
                found: vertices.len(),
            });
        }

        let edges = (0..vertices.len())
            .map(|i| {
                let u = vertices[i].clone();
                let v = vertices[(i + 1) % vertices.len()].clone();
                Edge::new(u, v).expect("list vertices are distinct")
            })
            .collect();

        Ok(Self {
            vertices: vertex_set,
            edges,
        })
    }

    pub fn vertices(&self) -> &IndexSet<A> {
        &self.vertices
    }

    pub fn edges(&self) -> &IndexSet<Edge<A>> {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The number of (vertex, incident edge) pairs: twice the edge count.
    pub fn incidence_count(&self) -> usize {
        2 * self.edges.len()
    }

    /// Whether `u` and `v` are adjacent.
    pub fn adjacent(&self, u: &A, v: &A) -> bool {
        match Edge::new(u.clone(), v.clone()) {
            Ok(edge) => self.edges.contains(&edge),
            Err(_) => false,
        }
    }

    /// The neighbourhood of `v`.
    ///
    /// Fails with [`Error::NotInDomain`] when `v` is not a vertex.
    pub fn neighbours(&self, v: &A) -> Result<IndexSet<A>> {
        if !self.vertices.contains(v) {
            return Err(Error::NotInDomain(format!(
                "{} is not in the vertex set",
                v
            )));
        }

        Ok(self
            .edges
            .iter()
            .filter_map(|e| e.other(v))
            .cloned()
            .collect())
    }

    /// The degree of `v`: the number of incident edges.
    pub fn degree(&self, v: &A) -> Result<usize> {
        Ok(self.neighbours(v)?.len())
    }

    /// The non-increasing degree sequence.
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = self
            .vertices
            .iter()
            .map(|v| self.edges.iter().filter(|e| e.incident_to(v)).count())
            .collect();
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        degrees
    }

    /// A new graph with `edge` added.
    ///
    /// Fails with [`Error::NotInDomain`] if either endpoint is not a
    /// vertex.
    pub fn add_edge(&self, edge: Edge<A>) -> Result<Self> {
        if !(self.vertices.contains(&edge.u) && self.vertices.contains(&edge.v)) {
            return Err(Error::NotInDomain(format!(
                "edge {} has an endpoint outside the vertex set",
                edge
            )));
        }

        Ok(Self {
            vertices: self.vertices.clone(),
            edges: set::union(&self.edges, &IndexSet::from([edge])),
        })
    }

    /// A new graph with `edge` removed.
    ///
    /// Fails with [`Error::NotInDomain`] if the edge is not in the graph.
    pub fn remove_edge(&self, edge: &Edge<A>) -> Result<Self> {
        if !self.edges.contains(edge) {
            return Err(Error::NotInDomain(format!("{} is not in the graph", edge)));
        }

        Ok(Self {
            vertices: self.vertices.clone(),
            edges: set::difference(&self.edges, &IndexSet::from([edge.clone()])),
        })
    }

    /// The subgraph induced by a vertex subset: those vertices and every
    /// edge with both endpoints among them.
    ///
    /// Fails with [`Error::NotASubset`] if `vertices ⊄` this graph's
    /// vertex set.
    pub fn induced_subgraph(&self, vertices: IndexSet<A>) -> Result<Self> {
        if let Some(stray) = vertices.iter().find(|v| !self.vertices.contains(*v)) {
            return Err(Error::NotASubset(format!(
                "{} is not in the vertex set",
                stray
            )));
        }

        let edges = self
            .edges
            .iter()
            .filter(|e| vertices.contains(&e.u) && vertices.contains(&e.v))
            .cloned()
            .collect();

        Ok(Self { vertices, edges })
    }
}
