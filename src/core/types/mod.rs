// src/core/types/mod.rs

//! Vector value types indexed by the ANN trees.

pub mod vector;

pub use vector::{DenseVector, DoubleVector, SparseVector};
