// src/core/indexing/ann/tests/mod.rs

mod test_tree;

use crate::core::types::{DenseVector, SparseVector};

pub(super) fn dense(values: &[f64]) -> DenseVector {
    DenseVector::from(values)
}

pub(super) fn sparse(values: &[f64]) -> SparseVector {
    SparseVector::from_dense(values)
}

/// The six 2-D points used across the tree and search tests, in insertion order.
pub(super) const POINTS_2D: [[f64; 2]; 6] =
    [[2.0, 3.0], [5.0, 4.0], [9.0, 6.0], [4.0, 7.0], [8.0, 1.0], [7.0, 2.0]];
