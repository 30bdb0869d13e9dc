// src/core/indexing/ann/iter.rs

//! Breadth-first traversals. Each iterator is finite and single-pass; ask the
//! tree for a new one to start over.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::node::{NodeId, TreeNode};

/// Yields nodes level by level, left child before right child.
#[derive(Debug, Clone)]
pub struct BreadthFirstNodes<'a, V, T> {
    nodes: &'a [TreeNode<V, T>],
    to_visit: VecDeque<NodeId>,
}

impl<'a, V, T> BreadthFirstNodes<'a, V, T> {
    pub(crate) fn new(nodes: &'a [TreeNode<V, T>], root: Option<NodeId>) -> Self {
        Self { nodes, to_visit: root.into_iter().collect() }
    }
}

impl<'a, V, T> Iterator for BreadthFirstNodes<'a, V, T> {
    type Item = &'a TreeNode<V, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = &self.nodes[self.to_visit.pop_front()?];
        self.to_visit.extend(current.left);
        self.to_visit.extend(current.right);
        Some(current)
    }
}

impl<V, T> FusedIterator for BreadthFirstNodes<'_, V, T> {}

/// Breadth-first traversal over the stored key vectors.
#[derive(Debug, Clone)]
pub struct Vectors<'a, V, T> {
    inner: BreadthFirstNodes<'a, V, T>,
}

impl<'a, V, T> Vectors<'a, V, T> {
    pub(crate) const fn new(inner: BreadthFirstNodes<'a, V, T>) -> Self {
        Self { inner }
    }
}

impl<'a, V, T> Iterator for Vectors<'a, V, T> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| &node.key_vector)
    }
}

impl<V, T> FusedIterator for Vectors<'_, V, T> {}
