//! finrel: finite discrete-mathematics structures
//!
//! Models binary relations, mappings (total single-valued functions),
//! partial orders, and their boolean adjacency-matrix representations over
//! finite domains, together with the algorithms that derive one
//! representation from another: reflexive and transitive closure, pair-set ↔
//! matrix conversion, and poset construction from a covering relation or a
//! total-order comparator.
//!
//! Everything is an immutable value object: operations that "modify" a
//! structure return a new instance, so concurrent readers may share any
//! value freely.

pub mod element;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod pair;
pub mod relation;
pub mod set;

pub use element::Element;
pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use matrix::Matrix;
pub use pair::Pair;
pub use relation::{closure, validate, Mapping, Ordering, Relation, Relational};
