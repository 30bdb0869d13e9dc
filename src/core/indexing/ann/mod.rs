// src/core/indexing/ann/mod.rs

//! Approximate nearest neighbour trees.
//!
//! One tree skeleton, [`AnnTree`], serves both a median-split KD-tree and a
//! random projection tree; the difference is the [`SplitPolicy`] picking the
//! axis of each new node. The trees give the following guarantees:
//!
//! - every insert creates a new node, identical vectors included
//! - payloads are optional
//! - lookups are approximate and may miss matching nodes, most notably
//!   after [`AnnIndex::balance`]
//! - all inserted and queried vectors share the dimension of the first insert

pub use self::error::{AnnResult, AnnTreeError};
pub use self::geometry::HyperRectangle;
pub use self::iter::{BreadthFirstNodes, Vectors};
pub use self::node::{NodeId, TreeNode};
pub use self::queue::LimitedPriorityQueue;
pub use self::result::VectorDistanceTuple;
pub use self::split::{
    MedianSplitPolicy, RandomSplitPolicy, SplitPolicy, SplitPolicyKind, SplitRule,
};
pub use self::tree::{AnnTree, ConfiguredTree, KdTree, RpTree};

use crate::core::types::DoubleVector;
use crate::core::vector::DistanceMeasure;

mod error;
mod geometry;
mod iter;
mod node;
mod queue;
mod range;
mod result;
mod search;
pub mod split;
mod tree;

#[cfg(test)]
mod tests;

/// Construction and search over an approximate nearest neighbour index.
///
/// Hits are returned in the collector's internal order, worst first; sort
/// and reverse them for nearest-first order.
pub trait AnnIndex<V, T> {
    /// Inserts one vector with an optional payload.
    ///
    /// # Errors
    /// `InvalidVector` for a zero-dimension vector, `DimensionMismatch` if it
    /// disagrees with the tree, `InvalidSplitDimension` if the policy
    /// misbehaves. The tree is unchanged on error.
    fn add(&mut self, vector: V, value: Option<T>) -> AnnResult<()>;

    /// Inserts payload-less vectors one by one, in input order.
    ///
    /// # Errors
    /// Stops at the first vector `add` rejects.
    fn construct_from_vectors<I>(&mut self, vectors: I) -> AnnResult<()>
    where
        I: IntoIterator<Item = V>;

    /// Inserts `(vector, payload)` pairs one by one, in input order.
    ///
    /// # Errors
    /// Stops at the first vector `add` rejects.
    fn construct_with_payload<I>(&mut self, pairs: I) -> AnnResult<()>
    where
        I: IntoIterator<Item = (V, T)>;

    /// Rebuilds the links into a balanced binary tree. Node count and split
    /// dimensions are unchanged.
    fn balance(&mut self);

    /// Number of stored vectors.
    fn size(&self) -> usize;

    /// The `k` nearest neighbours of `vector`.
    ///
    /// # Errors
    /// `InvalidVector` or `DimensionMismatch` for a malformed query.
    fn nearest_neighbours<Q>(
        &self,
        vector: &Q,
        k: usize,
    ) -> AnnResult<Vec<VectorDistanceTuple<V, T>>>
    where
        Q: DoubleVector + ?Sized;

    /// Neighbours of `vector` within `radius`.
    ///
    /// # Errors
    /// `InvalidVector` or `DimensionMismatch` for a malformed query.
    fn within_radius<Q>(
        &self,
        vector: &Q,
        radius: f64,
    ) -> AnnResult<Vec<VectorDistanceTuple<V, T>>>
    where
        Q: DoubleVector + ?Sized;

    /// At most `k` neighbours of `vector` within `radius`.
    ///
    /// # Errors
    /// `InvalidVector` or `DimensionMismatch` for a malformed query.
    fn nearest_neighbours_within<Q>(
        &self,
        vector: &Q,
        k: usize,
        radius: f64,
    ) -> AnnResult<Vec<VectorDistanceTuple<V, T>>>
    where
        Q: DoubleVector + ?Sized;

    /// Stored vectors lying between `lower` and `upper`, distance `0` each.
    ///
    /// # Errors
    /// `InvalidVector` or `DimensionMismatch` for a malformed bound.
    fn range_query<L, U>(
        &self,
        lower: &L,
        upper: &U,
    ) -> AnnResult<Vec<VectorDistanceTuple<V, T>>>
    where
        L: DoubleVector + ?Sized,
        U: DoubleVector + ?Sized;
}

impl<V, T, P, D> AnnIndex<V, T> for AnnTree<V, T, P, D>
where
    V: DoubleVector + Clone,
    T: Clone,
    P: SplitPolicy<V, T>,
    D: DistanceMeasure,
{
    fn add(&mut self, vector: V, value: Option<T>) -> AnnResult<()> {
        self.insert(vector, value).map(|_| ())
    }

    fn construct_from_vectors<I>(&mut self, vectors: I) -> AnnResult<()>
    where
        I: IntoIterator<Item = V>,
    {
        self.construct(vectors.into_iter().map(|vector| (vector, None)))
    }

    fn construct_with_payload<I>(&mut self, pairs: I) -> AnnResult<()>
    where
        I: IntoIterator<Item = (V, T)>,
    {
        self.construct(
            pairs
                .into_iter()
                .map(|(vector, value)| (vector, Some(value))),
        )
    }

    fn balance(&mut self) {
        self.rebalance();
    }

    fn size(&self) -> usize {
        self.size
    }

    fn nearest_neighbours<Q>(
        &self,
        vector: &Q,
        k: usize,
    ) -> AnnResult<Vec<VectorDistanceTuple<V, T>>>
    where
        Q: DoubleVector + ?Sized,
    {
        self.search(vector, k, f64::MAX)
    }

    fn within_radius<Q>(
        &self,
        vector: &Q,
        radius: f64,
    ) -> AnnResult<Vec<VectorDistanceTuple<V, T>>>
    where
        Q: DoubleVector + ?Sized,
    {
        self.search(vector, usize::MAX, radius)
    }

    fn nearest_neighbours_within<Q>(
        &self,
        vector: &Q,
        k: usize,
        radius: f64,
    ) -> AnnResult<Vec<VectorDistanceTuple<V, T>>>
    where
        Q: DoubleVector + ?Sized,
    {
        self.search(vector, k, radius)
    }

    fn range_query<L, U>(
        &self,
        lower: &L,
        upper: &U,
    ) -> AnnResult<Vec<VectorDistanceTuple<V, T>>>
    where
        L: DoubleVector + ?Sized,
        U: DoubleVector + ?Sized,
    {
        self.range(lower, upper)
    }
}
