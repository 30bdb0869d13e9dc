// src/core/indexing/ann/split/mod.rs

//! Split policies deciding which axis a freshly inserted node splits on.

pub mod median;
pub mod random;

pub use median::MedianSplitPolicy;
pub use random::RandomSplitPolicy;

use super::node::TreeNode;
use crate::core::types::DoubleVector;
use serde::{Deserialize, Serialize};

/// Chooses a split dimension for a vector about to be inserted.
///
/// Called once per insert, after the insert position is known. The returned
/// index must be in `[0, vector.dimension())`; the tree rejects anything else
/// with [`AnnTreeError::InvalidSplitDimension`](super::AnnTreeError::InvalidSplitDimension).
pub trait SplitPolicy<V: DoubleVector, T> {
    /// * `vector` - the vector being inserted.
    /// * `level` - depth of the parent the new node attaches to (0 for the root).
    /// * `nodes` - every node inserted before this one.
    fn split_dimension(&mut self, vector: &V, level: usize, nodes: &[TreeNode<V, T>]) -> usize;
}

/// Which built-in policy a configured tree uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicyKind {
    /// KD-tree median split.
    #[default]
    Median,
    /// Random projection tree split.
    Random,
}

impl SplitPolicyKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Median => "median",
            Self::Random => "random",
        }
    }
}

/// Runtime choice between the two built-in policies.
#[derive(Debug, Clone)]
pub enum SplitRule {
    Median(MedianSplitPolicy),
    Random(RandomSplitPolicy),
}

impl SplitRule {
    /// Builds the policy for `kind`. `seed` only affects [`SplitPolicyKind::Random`];
    /// without one the random policy is seeded from OS entropy.
    #[must_use]
    pub fn new(kind: SplitPolicyKind, seed: Option<u64>) -> Self {
        match (kind, seed) {
            (SplitPolicyKind::Median, _) => Self::Median(MedianSplitPolicy::new()),
            (SplitPolicyKind::Random, Some(seed)) => {
                Self::Random(RandomSplitPolicy::with_seed(seed))
            }
            (SplitPolicyKind::Random, None) => Self::Random(RandomSplitPolicy::new()),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> SplitPolicyKind {
        match self {
            Self::Median(_) => SplitPolicyKind::Median,
            Self::Random(_) => SplitPolicyKind::Random,
        }
    }
}

impl<V: DoubleVector, T> SplitPolicy<V, T> for SplitRule {
    fn split_dimension(&mut self, vector: &V, level: usize, nodes: &[TreeNode<V, T>]) -> usize {
        match self {
            Self::Median(policy) => policy.split_dimension(vector, level, nodes),
            Self::Random(policy) => policy.split_dimension(vector, level, nodes),
        }
    }
}
