//! Unit tests for the labeled matrix type

use finrel::{Error, Matrix};

#[test]
fn test_from_rows_basic() {
    let m = Matrix::from_rows(vec![vec![0, 1, 0], vec![1, 0, 1]]).unwrap();
    assert_eq!(m.rows(), 2);
    assert_eq!(m.columns(), 3);
    assert_eq!(m.entry(0, 1), 1);
    assert_eq!(m.entry(1, 0), 1);
    assert_eq!(m.row(1), &[1, 0, 1]);
    assert!(!m.is_square());
}

#[test]
fn test_from_rows_ragged() {
    let err = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5]]).unwrap_err();
    assert_eq!(err, Error::InconsistentMatrixShape { expected: 3, found: 2 });
}

#[test]
fn test_empty_matrix() {
    let m = Matrix::from_rows(vec![]).unwrap();
    assert_eq!(m.rows(), 0);
    assert_eq!(m.columns(), 0);
    assert!(m.is_square());
}

#[test]
fn test_padded_fills_and_truncates() {
    let m = Matrix::from_rows_padded(2, 2, vec![vec![1, 2, 3], vec![4], vec![9, 9]]);
    assert_eq!(m.row(0), &[1, 2]);
    assert_eq!(m.row(1), &[4, 0]);
}

#[test]
fn test_equality_is_structural() {
    let a = Matrix::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
    let b = Matrix::from_fn(2, 2, |i, j| u32::from(i != j));
    let c = Matrix::from_rows(vec![vec![0, 1], vec![1, 1]]).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);

    // Labels are presentation only
    let labeled = b.with_labels(vec!["x".into(), "y".into()], vec!["x".into(), "y".into()]);
    assert_eq!(a, labeled);
}

#[test]
fn test_display_alignment() {
    let m = Matrix::from_rows(vec![vec![0, 1], vec![10, 0]])
        .unwrap()
        .with_labels(
            vec!["a".into(), "b".into()],
            vec!["a".into(), "b".into()],
        );

    let rendered = m.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);

    // Row-label column is at least 5 wide; entry columns fit the widest
    // entry ("10") right-aligned.
    assert_eq!(lines[0], "        a  b");
    assert_eq!(lines[1], "a       0  1");
    assert_eq!(lines[2], "b      10  0");
}

#[test]
fn test_display_without_labels() {
    let m = Matrix::from_rows(vec![vec![1]]).unwrap();
    let lines: Vec<String> = m.to_string().lines().map(String::from).collect();
    assert_eq!(lines[1].trim(), "1");
}
