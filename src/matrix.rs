//! Immutable labeled integer matrices.
//!
//! The backing representation for relations viewed as boolean adjacency
//! tables: a rectangular grid of entries (restricted to {0, 1} when used as
//! an adjacency matrix) with optional row and column labels. Equality is
//! structural — dimensions and entries; labels are presentation only.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};

/// An immutable rectangular matrix of `u32` entries with optional labels.
///
/// Label lists may be shorter than the dimension they annotate; missing
/// labels render empty.
#[derive(Clone, Debug)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    /// Row-major entries, `rows * columns` long.
    entries: Vec<u32>,
    row_labels: Vec<String>,
    column_labels: Vec<String>,
}

impl Matrix {
    /// Build a matrix from rows.
    ///
    /// Fails with [`Error::InconsistentMatrixShape`] if the rows are ragged.
    /// An empty input yields the 0×0 matrix.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let columns = rows.first().map_or(0, |r| r.len());

        for row in &rows {
            if row.len() != columns {
                return Err(Error::InconsistentMatrixShape {
                    expected: columns,
                    found: row.len(),
                });
            }
        }

        Ok(Self {
            rows: rows.len(),
            columns,
            entries: rows.into_iter().flatten().collect(),
            row_labels: Vec::new(),
            column_labels: Vec::new(),
        })
    }

    /// Build an `m × n` matrix, zero-filling entries the input does not
    /// cover and ignoring entries beyond `m` rows or `n` columns.
    pub fn from_rows_padded(m: usize, n: usize, rows: Vec<Vec<u32>>) -> Self {
        let mut entries = vec![0; m * n];
        for (i, row) in rows.into_iter().enumerate().take(m) {
            for (j, value) in row.into_iter().enumerate().take(n) {
                entries[i * n + j] = value;
            }
        }

        Self {
            rows: m,
            columns: n,
            entries,
            row_labels: Vec::new(),
            column_labels: Vec::new(),
        }
    }

    /// Build an `m × n` matrix from a function of the entry position.
    pub fn from_fn(m: usize, n: usize, mut f: impl FnMut(usize, usize) -> u32) -> Self {
        let mut entries = Vec::with_capacity(m * n);
        for i in 0..m {
            for j in 0..n {
                entries.push(f(i, j));
            }
        }

        Self {
            rows: m,
            columns: n,
            entries,
            row_labels: Vec::new(),
            column_labels: Vec::new(),
        }
    }

    /// Attach row and column labels, consuming the matrix.
    pub fn with_labels(mut self, row_labels: Vec<String>, column_labels: Vec<String>) -> Self {
        self.row_labels = row_labels;
        self.column_labels = column_labels;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// The entry at `(i, j)`.
    ///
    /// # Panics
    /// If `i` or `j` is out of range.
    pub fn entry(&self, i: usize, j: usize) -> u32 {
        assert!(i < self.rows && j < self.columns, "matrix index out of range");
        self.entries[i * self.columns + j]
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[u32] {
        assert!(i < self.rows, "matrix row out of range");
        &self.entries[i * self.columns..(i + 1) * self.columns]
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }
}

// Labels are presentation only: two matrices are equal iff their dimensions
// and entries agree.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.columns == other.columns && self.entries == other.entries
    }
}

impl Eq for Matrix {}

impl Hash for Matrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.columns.hash(state);
        self.entries.hash(state);
    }
}

impl fmt::Display for Matrix {
    /// Header row of column labels, then one labeled row per entry row.
    /// Column widths are the max of label width and widest entry,
    /// right-aligned; the row-label column is left-aligned and at least 5
    /// characters wide. Human inspection only — there is no machine
    /// round-trip format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .row_labels
            .iter()
            .map(|l| l.len())
            .max()
            .unwrap_or(0)
            .max(5);

        let column_label = |j: usize| self.column_labels.get(j).map_or("", |l| l.as_str());
        let widths: Vec<usize> = (0..self.columns)
            .map(|j| {
                let widest_entry = (0..self.rows)
                    .map(|i| digits(self.entry(i, j)))
                    .max()
                    .unwrap_or(0);
                column_label(j).len().max(widest_entry)
            })
            .collect();

        write!(f, "{:>label_width$}", "")?;
        for (j, &width) in widths.iter().enumerate() {
            write!(f, "  {:>width$}", column_label(j))?;
        }
        writeln!(f)?;

        for i in 0..self.rows {
            let row_label = self.row_labels.get(i).map_or("", |l| l.as_str());
            write!(f, "{:<label_width$}", row_label)?;
            for (j, &width) in widths.iter().enumerate() {
                write!(f, "  {:>width$}", self.entry(i, j))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

fn digits(value: u32) -> usize {
    value.to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Matrix::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(err, Error::InconsistentMatrixShape { expected: 2, found: 1 });
    }

    #[test]
    fn test_equality_ignores_labels() {
        let a = Matrix::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let b = a.clone().with_labels(vec!["x".into()], vec!["y".into()]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_padded_constructor_zero_fills() {
        let m = Matrix::from_rows_padded(2, 3, vec![vec![7]]);
        assert_eq!(m.row(0), &[7, 0, 0]);
        assert_eq!(m.row(1), &[0, 0, 0]);
    }
}
