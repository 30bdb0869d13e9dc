// src/core/indexing/ann/split/median.rs

//! KD-tree split rule: split on the axis holding the median component.

use super::SplitPolicy;
use crate::core::indexing::ann::node::TreeNode;
use crate::core::types::DoubleVector;

/// Picks the median axis of the inserted vector.
///
/// Two and three dimensional vectors get an exact median by direct
/// comparison. Larger dense vectors fall back to round-robin on the insert
/// level. Sparse vectors apply the same special cases to their non-zero
/// entries only and otherwise split on the first non-zero index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MedianSplitPolicy;

impl MedianSplitPolicy {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<V: DoubleVector, T> SplitPolicy<V, T> for MedianSplitPolicy {
    fn split_dimension(&mut self, vector: &V, level: usize, _nodes: &[TreeNode<V, T>]) -> usize {
        median(vector, level)
    }
}

/// Index of the median component of `v`, see [`MedianSplitPolicy`].
pub fn median<V: DoubleVector + ?Sized>(v: &V, insert_level: usize) -> usize {
    let dimension = v.dimension();
    if dimension == 1 {
        return 0;
    }
    if !v.is_sparse() {
        return match dimension {
            2 => median_of_two(v, 0, 1),
            3 => median_of_three(v, 0, 1, 2),
            _ => (insert_level + 1) % dimension,
        };
    }

    let mut non_zero = v.iter_non_zero().map(|(index, _)| index);
    match (v.length(), non_zero.next(), non_zero.next(), non_zero.next()) {
        (2, Some(i), Some(j), _) => median_of_two(v, i, j),
        (3, Some(i), Some(j), Some(k)) => median_of_three(v, i, j, k),
        (_, Some(first), _, _) => first,
        // all-zero sparse vector: nothing to pick from
        (_, None, _, _) => (insert_level + 1) % dimension,
    }
}

/// Ties go to `j`.
fn median_of_two<V: DoubleVector + ?Sized>(v: &V, i: usize, j: usize) -> usize {
    if v.get(i) > v.get(j) {
        i
    } else {
        j
    }
}

fn median_of_three<V: DoubleVector + ?Sized>(v: &V, i: usize, j: usize, k: usize) -> usize {
    let (large, small) = if v.get(i) > v.get(j) { (i, j) } else { (j, i) };
    if v.get(k) > v.get(large) {
        large
    } else if v.get(small) > v.get(k) {
        small
    } else {
        k
    }
}
