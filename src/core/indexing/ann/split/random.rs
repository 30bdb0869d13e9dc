// src/core/indexing/ann/split/random.rs

//! Random projection tree split rule.
//!
//! Based on section 2.3 of "Random projection trees and low dimensional
//! manifolds" (Dasgupta, Freund). Every insert draws a fresh, uniformly
//! random axis; the level and the nodes inserted so far are ignored.

use super::SplitPolicy;
use crate::core::indexing::ann::node::TreeNode;
use crate::core::types::DoubleVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Splits on a uniformly random axis drawn from an owned RNG.
#[derive(Debug, Clone)]
pub struct RandomSplitPolicy<R = StdRng> {
    rng: R,
}

impl RandomSplitPolicy<StdRng> {
    /// Seeds the policy from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Deterministic policy: equal seeds give equal split sequences.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomSplitPolicy<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomSplitPolicy<R> {
    /// Uses a caller-supplied random source.
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draws an axis in `[0, dimension)`.
    pub fn next_dimension(&mut self, dimension: usize) -> usize {
        self.rng.gen_range(0..dimension)
    }
}

impl<V: DoubleVector, T, R: Rng> SplitPolicy<V, T> for RandomSplitPolicy<R> {
    fn split_dimension(&mut self, vector: &V, _level: usize, _nodes: &[TreeNode<V, T>]) -> usize {
        self.next_dimension(vector.dimension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DenseVector;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_draws_stay_in_range() {
        let mut policy = RandomSplitPolicy::with_seed(7);
        let v = DenseVector::zeros(5);
        let nodes: &[TreeNode<DenseVector, ()>] = &[];
        let mut seen = [false; 5];
        for level in 0..500 {
            let dimension = policy.split_dimension(&v, level, nodes);
            assert!(dimension < 5);
            seen[dimension] = true;
        }
        assert!(seen.iter().all(|s| *s), "every axis should be drawn eventually");
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomSplitPolicy::with_seed(42);
        let mut b = RandomSplitPolicy::with_seed(42);
        let draws_a: Vec<usize> = (0..32).map(|_| a.next_dimension(16)).collect();
        let draws_b: Vec<usize> = (0..32).map(|_| b.next_dimension(16)).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_injected_rng() {
        let mut policy = RandomSplitPolicy::from_rng(StepRng::new(0, 0));
        let v = DenseVector::zeros(3);
        let nodes: &[TreeNode<DenseVector, ()>] = &[];
        assert_eq!(policy.split_dimension(&v, 0, nodes), 0);
        assert_eq!(policy.split_dimension(&v, 9, nodes), 0);
    }

    #[test]
    fn test_single_dimension_always_zero() {
        let mut policy = RandomSplitPolicy::new();
        for _ in 0..10 {
            assert_eq!(policy.next_dimension(1), 0);
        }
    }
}
