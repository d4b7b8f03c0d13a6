//! Closure and matrix conversion — the bridge that lets closures be
//! computed as boolean matrix arithmetic instead of set rewriting.
//!
//! A relation set over a finite domain converts to a boolean adjacency
//! matrix by fixing the canonical key order on domain and codomain; the
//! transitive closure is then Floyd–Warshall over the {0, 1} semiring
//! (OR/AND, not shortest paths), and the closed matrix converts back over
//! the same order. Matrix rows are held as roaring bitmaps during the
//! closure, which fuses the two inner loops into one bitmap OR per
//! reachable intermediate — cell-for-cell identical to the textbook triple
//! loop.
//!
//! The matrix round trip is the one place an O(n³) cost is paid, with an
//! |domain|² working set; everything else here is linear in the relation.

use std::collections::HashMap;

use indexmap::IndexSet;
use roaring::RoaringBitmap;

use crate::element::{self, Element};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::pair::Pair;
use crate::set;

/// Reflexive closure: `relation_set ∪ {(x, x) : x ∈ domain}`.
pub fn reflexive<A: Element>(
    domain: &IndexSet<A>,
    relation_set: &IndexSet<Pair<A, A>>,
) -> IndexSet<Pair<A, A>> {
    set::union(relation_set, &set::identity_pairs(domain))
}

/// Transitive closure of a relation over a single domain, via the matrix
/// round trip: pair set → adjacency rows → boolean Floyd–Warshall → pair
/// set.
///
/// Pairs must lie within `domain × domain`; a violation is a caller
/// contract error.
pub fn transitive<A: Element>(
    domain: &IndexSet<A>,
    relation_set: &IndexSet<Pair<A, A>>,
) -> IndexSet<Pair<A, A>> {
    let elems = element::sorted(domain);
    let index: HashMap<&A, u32> = elems
        .iter()
        .enumerate()
        .map(|(i, e)| (e, i as u32))
        .collect();

    let mut rows = vec![RoaringBitmap::new(); elems.len()];
    for pair in relation_set {
        let i = *index
            .get(&pair.a)
            .expect("relation pair outside the domain");
        let j = *index
            .get(&pair.b)
            .expect("relation pair outside the domain");
        rows[i as usize].insert(j);
    }

    close_rows(&mut rows);

    let mut out = IndexSet::new();
    for (i, row) in rows.iter().enumerate() {
        for j in row {
            out.insert(Pair::new(elems[i].clone(), elems[j as usize].clone()));
        }
    }
    out
}

/// Convert a relation set to its boolean adjacency matrix.
///
/// Rows follow the canonical key order of the domain, columns that of the
/// codomain; entry `(i, j)` is 1 iff the i-th domain element relates to the
/// j-th codomain element. Row and column labels are the key projections.
pub fn adjacency_matrix<A: Element, B: Element>(
    domain: &IndexSet<A>,
    codomain: &IndexSet<B>,
    relation_set: &IndexSet<Pair<A, B>>,
) -> Matrix {
    let rows = element::sorted(domain);
    let columns = element::sorted(codomain);

    Matrix::from_fn(rows.len(), columns.len(), |i, j| {
        u32::from(relation_set.contains(&Pair::new(rows[i].clone(), columns[j].clone())))
    })
    .with_labels(element::labels(&rows), element::labels(&columns))
}

/// Convert an adjacency matrix back to a relation set, over the same
/// canonical order [`adjacency_matrix`] fixed. Any nonzero entry denotes
/// presence.
///
/// Fails with [`Error::InconsistentMatrixShape`] if the matrix dimensions
/// disagree with |domain| × |codomain|.
pub fn relation_set_from_matrix<A: Element, B: Element>(
    domain: &IndexSet<A>,
    codomain: &IndexSet<B>,
    adjacency: &Matrix,
) -> Result<IndexSet<Pair<A, B>>> {
    if adjacency.rows() != domain.len() {
        return Err(Error::InconsistentMatrixShape {
            expected: domain.len(),
            found: adjacency.rows(),
        });
    }
    if adjacency.columns() != codomain.len() {
        return Err(Error::InconsistentMatrixShape {
            expected: codomain.len(),
            found: adjacency.columns(),
        });
    }

    let rows = element::sorted(domain);
    let columns = element::sorted(codomain);

    let mut out = IndexSet::new();
    for (i, x) in rows.iter().enumerate() {
        for (j, y) in columns.iter().enumerate() {
            if adjacency.entry(i, j) != 0 {
                out.insert(Pair::new(x.clone(), y.clone()));
            }
        }
    }
    Ok(out)
}

/// Boolean transitive closure of a square adjacency matrix.
///
/// Fails with [`Error::NotASquareMatrix`] otherwise. Entries are clamped to
/// {0, 1} (any nonzero input counts as an edge); labels carry over. O(m³)
/// time, O(m²) space for the working copy, deterministic.
pub fn floyd_warshall(adjacency: &Matrix) -> Result<Matrix> {
    if !adjacency.is_square() {
        return Err(Error::NotASquareMatrix {
            rows: adjacency.rows(),
            columns: adjacency.columns(),
        });
    }

    let m = adjacency.rows();
    let mut rows: Vec<RoaringBitmap> = (0..m)
        .map(|i| {
            (0..m)
                .filter(|&j| adjacency.entry(i, j) != 0)
                .map(|j| j as u32)
                .collect()
        })
        .collect();

    close_rows(&mut rows);

    let closed = Matrix::from_fn(m, m, |i, j| u32::from(rows[i].contains(j as u32)))
        .with_labels(
            adjacency.row_labels().to_vec(),
            adjacency.column_labels().to_vec(),
        );
    Ok(closed)
}

/// The Floyd–Warshall kernel over bitmap rows.
///
/// `k` must be outermost: after pass `k`, row `i` contains `j` iff a path
/// i → j exists using only intermediate vertices ≤ k. The row snapshot is
/// sound because the only in-pass write to row `k` would OR it with itself.
fn close_rows(rows: &mut [RoaringBitmap]) {
    let m = rows.len();
    for k in 0..m {
        let row_k = rows[k].clone();
        for i in 0..m {
            if rows[i].contains(k as u32) {
                rows[i] |= &row_k;
            }
        }
    }
}
