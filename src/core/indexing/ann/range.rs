// src/core/indexing/ann/range.rs

//! Axis-aligned range queries.
//!
//! Bounds are interpreted sparsely: only the non-zero components of a bound
//! vector constrain the matching nodes, a zero imposes no limit on its axis.

use std::collections::VecDeque;

use super::error::AnnResult;
use super::node::TreeNode;
use super::result::VectorDistanceTuple;
use super::tree::AnnTree;
use crate::core::types::DoubleVector;

impl<V, T, P, D> AnnTree<V, T, P, D>
where
    V: DoubleVector + Clone,
    T: Clone,
{
    /// Breadth-first collection of the nodes between `lower` and `upper`.
    /// Every hit carries distance `0`.
    pub(crate) fn range<L, U>(
        &self,
        lower: &L,
        upper: &U,
    ) -> AnnResult<Vec<VectorDistanceTuple<V, T>>>
    where
        L: DoubleVector + ?Sized,
        U: DoubleVector + ?Sized,
    {
        let non_empty = self.validate_query(lower)?;
        self.validate_query(upper)?;
        if !non_empty {
            return Ok(Vec::new());
        }

        let mut hits = Vec::new();
        let mut to_visit: VecDeque<_> = self.root.into_iter().collect();
        while let Some(id) = to_visit.pop_front() {
            let node = &self.nodes[id];
            if strict_lower(upper, &node.key_vector) && strict_higher(lower, &node.key_vector) {
                let (vector, value) = (node.key_vector.clone(), node.value.clone());
                hits.push(VectorDistanceTuple::new(vector, value, 0.0));
            }
            for child in [node.left, node.right].into_iter().flatten() {
                if subtree_may_intersect(lower, upper, &self.nodes[child]) {
                    to_visit.push_back(child);
                }
            }
        }
        Ok(hits)
    }
}

/// Coarse one-sided test on the child's own split axis. It may visit a
/// subtree without matches and may also prune one holding a match.
fn subtree_may_intersect<L, U, V, T>(lower: &L, upper: &U, child: &TreeNode<V, T>) -> bool
where
    L: DoubleVector + ?Sized,
    U: DoubleVector + ?Sized,
    V: DoubleVector,
{
    let split = child.split_dimension;
    let split_value = child.split_value();
    lower.get(split) >= split_value || upper.get(split) >= split_value
}

/// `current` is not below `lower` on any axis where `lower` is non-zero.
pub(crate) fn strict_higher<L, C>(lower: &L, current: &C) -> bool
where
    L: DoubleVector + ?Sized,
    C: DoubleVector + ?Sized,
{
    lower.iter_non_zero().all(|(index, value)| current.get(index) >= value)
}

/// `current` is not above `upper` on any axis where `upper` is non-zero.
pub(crate) fn strict_lower<U, C>(upper: &U, current: &C) -> bool
where
    U: DoubleVector + ?Sized,
    C: DoubleVector + ?Sized,
{
    upper.iter_non_zero().all(|(index, value)| current.get(index) <= value)
}
