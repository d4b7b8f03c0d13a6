//! Failure conditions.
//!
//! Every validation failure is a distinct, named condition so callers can
//! discriminate. Construction failures are all-or-nothing: no partially
//! constructed object exists afterwards, and nothing is retried internally.

use std::fmt;

/// Construction-invariant and usage-time violations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Undirected edge with equal endpoints (self-loops are not simple).
    InvalidEdge(String),
    /// A function image escapes the declared codomain, or a composition's
    /// first codomain is not contained in the second domain.
    InvalidCodomain(String),
    /// Relation is not total and single-valued over its domain.
    NotAMapping(String),
    /// Set operation applied to a set that is not a subset of the domain.
    NotASubset(String),
    /// Element queried outside a declared domain or vertex set.
    NotInDomain(String),
    /// Comparator disagrees with the linear order it induced.
    InvalidComparator,
    /// Transitive closure needs a square adjacency matrix.
    NotASquareMatrix { rows: usize, columns: usize },
    /// Ragged rows, or matrix dimensions that disagree with the declared
    /// domain and codomain.
    InconsistentMatrixShape { expected: usize, found: usize },
    /// `choose(set, k)` with `k` exceeding the set size.
    InvalidChoose { k: usize, size: usize },
    /// Graph constructor given fewer vertices than its shape needs.
    TooFewVertices { required: usize, found: usize },
    /// Path/cycle vertex list with a repeated vertex.
    DuplicateVertex(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEdge(s) => write!(f, "invalid edge: {}", s),
            Error::InvalidCodomain(s) => write!(f, "invalid codomain: {}", s),
            Error::NotAMapping(s) => write!(f, "not a mapping: {}", s),
            Error::NotASubset(s) => write!(f, "not a subset: {}", s),
            Error::NotInDomain(s) => write!(f, "not in domain: {}", s),
            Error::InvalidComparator => {
                write!(f, "comparator is not consistent with a linear ordering")
            }
            Error::NotASquareMatrix { rows, columns } => {
                write!(f, "not a square matrix: {} rows, {} columns", rows, columns)
            }
            Error::InconsistentMatrixShape { expected, found } => {
                write!(
                    f,
                    "inconsistent matrix shape: expected {}, found {}",
                    expected, found
                )
            }
            Error::InvalidChoose { k, size } => {
                write!(f, "cannot choose {} elements from a set of {}", k, size)
            }
            Error::TooFewVertices { required, found } => {
                write!(f, "too few vertices: need at least {}, got {}", required, found)
            }
            Error::DuplicateVertex(s) => write!(f, "duplicate vertex: {}", s),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
