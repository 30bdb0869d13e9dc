#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::cast_sign_loss)]
#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

//! # Oxiann: approximate nearest neighbour trees
//!
//! `oxiann` is an embeddable, single-threaded library of binary
//! space-partitioning trees over `f64` vectors:
//! - median-split KD-trees and random projection (RP) trees on one skeleton
//! - dense and sparse vectors behind the [`DoubleVector`] trait
//! - k-nearest-neighbour, radius and combined searches by branch-and-bound
//! - sparse-aware axis-aligned range queries
//! - explicit rebalancing, optional payloads and duplicates
//!
//! Searches are approximate by design: they may miss neighbours, most notably
//! after a [`balance`](AnnIndex::balance).
//!
//! ```
//! use oxiann::{AnnIndex, DenseVector, KdTree};
//!
//! let mut tree: KdTree<DenseVector, &str> = KdTree::kd();
//! tree.add(DenseVector::new(vec![2.0, 3.0]), Some("a")).unwrap();
//! tree.add(DenseVector::new(vec![5.0, 4.0]), Some("b")).unwrap();
//!
//! let hits = tree.nearest_neighbours(&DenseVector::new(vec![0.0, 0.0]), 1).unwrap();
//! assert_eq!(hits[0].value(), Some(&"a"));
//! ```

pub mod core;

pub use crate::core::common::OxiannError;
pub use crate::core::config::{AnnConfig, ConfigBuilder};
pub use crate::core::indexing::ann::{
    AnnIndex, AnnResult, AnnTree, AnnTreeError, ConfiguredTree, KdTree, MedianSplitPolicy,
    RandomSplitPolicy, RpTree, SplitPolicy, SplitPolicyKind, SplitRule, VectorDistanceTuple,
};
pub use crate::core::types::{DenseVector, DoubleVector, SparseVector};
pub use crate::core::vector::{DistanceMeasure, EuclideanDistance, ManhattanDistance, Metric};

/// Core result type for the library
pub type Result<T> = std::result::Result<T, OxiannError>;
