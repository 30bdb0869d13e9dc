// src/core/indexing/ann/search.rs

//! Branch-and-bound nearest neighbour search after Andrew W. Moore's
//! kd-tree tutorial, unified over k-NN, radius and k-NN-within-radius.

use super::error::AnnResult;
use super::geometry::HyperRectangle;
use super::node::NodeId;
use super::queue::LimitedPriorityQueue;
use super::result::VectorDistanceTuple;
use super::tree::AnnTree;
use crate::core::types::DoubleVector;
use crate::core::vector::DistanceMeasure;

type Collector<V, T> = LimitedPriorityQueue<VectorDistanceTuple<V, T>>;

impl<V, T, P, D> AnnTree<V, T, P, D>
where
    V: DoubleVector + Clone,
    T: Clone,
    D: DistanceMeasure,
{
    /// Collects at most `k` hits within `radius` of `target`, worst hit first.
    ///
    /// Pass `usize::MAX` as `k` for a pure radius search and `f64::MAX` as
    /// `radius` for a pure k-NN search.
    pub(crate) fn search<Q>(
        &self,
        target: &Q,
        k: usize,
        radius: f64,
    ) -> AnnResult<Vec<VectorDistanceTuple<V, T>>>
    where
        Q: DoubleVector + ?Sized,
    {
        if !self.validate_query(target)? || k == 0 {
            return Ok(Vec::new());
        }
        let mut queue: Collector<V, T> = LimitedPriorityQueue::new(k);
        let rect = HyperRectangle::infinite(target.dimension());
        self.nearest_recursive(self.root, target, rect, radius, radius, &mut queue);
        Ok(queue.into_list())
    }

    fn nearest_recursive<Q>(
        &self,
        current: Option<NodeId>,
        target: &Q,
        rect: HyperRectangle,
        mut max_dist: f64,
        radius: f64,
        queue: &mut Collector<V, T>,
    ) where
        Q: DoubleVector + ?Sized,
    {
        let Some(id) = current else {
            return;
        };
        let node = &self.nodes[id];
        let split = node.split_dimension;
        let pivot = &node.key_vector;
        let pivot_distance = self.distance.measure_distance(pivot, target);

        let (left_rect, right_rect) = rect.split_at(split, pivot.get(split));
        let (nearest, nearest_rect, farthest, farthest_rect) =
            if target.get(split) > pivot.get(split) {
                (node.left, left_rect, node.right, right_rect)
            } else {
                (node.right, right_rect, node.left, left_rect)
            };
        self.nearest_recursive(nearest, target, nearest_rect, max_dist, radius, queue);

        let mut bound = worst_kept(queue);
        max_dist = max_dist.min(bound);
        let closest = farthest_rect.closest_point(target);
        let closest_distance = self.distance.measure_distance(&closest, target);
        // the far side is still worth a look when it reaches into the radius
        if closest_distance < max_dist || closest_distance < radius {
            if pivot_distance < bound {
                // a zero distance must not shrink the bound and prune our own subtree
                if pivot_distance > 0.0 {
                    bound = pivot_distance;
                }
                if pivot_distance <= radius {
                    queue.add(
                        VectorDistanceTuple::new(pivot.clone(), node.value.clone(), pivot_distance),
                        pivot_distance,
                    );
                }
                max_dist = worst_kept(queue).min(bound);
            }
            self.nearest_recursive(farthest, target, farthest_rect, max_dist, radius, queue);
        }
    }
}

/// Worst kept distance once the collector is full, unbounded before that.
fn worst_kept<E>(queue: &LimitedPriorityQueue<E>) -> f64 {
    if queue.is_full() {
        queue.worst_priority().unwrap_or(f64::MAX)
    } else {
        f64::MAX
    }
}
