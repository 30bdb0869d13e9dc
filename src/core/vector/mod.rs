// src/core/vector/mod.rs

//! Distance metrics over [`DoubleVector`](crate::core::types::DoubleVector) implementors.

pub mod distance;

pub use distance::{DistanceMeasure, EuclideanDistance, ManhattanDistance, Metric};
