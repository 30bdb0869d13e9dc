// src/core/indexing/ann/node.rs

use crate::core::types::DoubleVector;

/// Index of a node inside the tree's arena.
pub type NodeId = usize;

/// A stored vector together with the axis it splits its subtree on.
///
/// Nodes never change after insertion except for their child links, which
/// are rewritten by inserts and by [`balance`](super::AnnIndex::balance).
#[derive(Debug, Clone)]
pub struct TreeNode<V, T> {
    pub(crate) split_dimension: usize,
    pub(crate) key_vector: V,
    pub(crate) value: Option<T>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<V: DoubleVector, T> TreeNode<V, T> {
    pub(crate) const fn new(split_dimension: usize, key_vector: V, value: Option<T>) -> Self {
        Self { split_dimension, key_vector, value, left: None, right: None }
    }

    /// Component of the key vector on the split axis.
    pub fn split_value(&self) -> f64 {
        self.key_vector.get(self.split_dimension)
    }

    #[must_use]
    pub const fn split_dimension(&self) -> usize {
        self.split_dimension
    }

    #[must_use]
    pub const fn key_vector(&self) -> &V {
        &self.key_vector
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}
