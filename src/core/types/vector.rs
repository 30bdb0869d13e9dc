// src/core/types/vector.rs

//! Dense and sparse `f64` vectors.
//!
//! The trees only ever talk to vectors through the [`DoubleVector`] trait, so
//! callers may plug in their own storage as long as it reports a fixed
//! dimension and random access by index.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed-dimension vector of `f64` components.
pub trait DoubleVector {
    /// Number of components, including zeros.
    fn dimension(&self) -> usize;

    /// Value at `index`. Sparse vectors return `0.0` for absent entries.
    fn get(&self, index: usize) -> f64;

    /// Overwrites the value at `index`.
    fn set(&mut self, index: usize, value: f64);

    /// Whether only the non-zero entries are stored.
    fn is_sparse(&self) -> bool;

    /// Number of stored entries: the non-zero count for sparse vectors,
    /// the dimension for dense ones.
    fn length(&self) -> usize;

    /// Iterates `(index, value)` pairs of non-zero entries in ascending index order.
    fn iter_non_zero(&self) -> impl Iterator<Item = (usize, f64)> + '_;
}

/// Contiguous vector storing every component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DenseVector {
    data: Vec<f64>,
}

impl DenseVector {
    /// Creates a dense vector owning `data`.
    #[must_use]
    pub const fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Creates a vector of `dimension` zeros.
    #[must_use]
    pub fn zeros(dimension: usize) -> Self {
        Self { data: vec![0.0; dimension] }
    }

    /// Creates a vector with every component set to `value`.
    #[must_use]
    pub fn filled(dimension: usize, value: f64) -> Self {
        Self { data: vec![value; dimension] }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }
}

impl From<Vec<f64>> for DenseVector {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl From<&[f64]> for DenseVector {
    fn from(data: &[f64]) -> Self {
        Self::new(data.to_vec())
    }
}

impl DoubleVector for DenseVector {
    fn dimension(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> f64 {
        self.data[index]
    }

    fn set(&mut self, index: usize, value: f64) {
        self.data[index] = value;
    }

    fn is_sparse(&self) -> bool {
        false
    }

    fn length(&self) -> usize {
        self.data.len()
    }

    fn iter_non_zero(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.data.iter().copied().enumerate().filter(|(_, value)| *value != 0.0)
    }
}

/// Vector storing only its non-zero components, keyed by index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SparseVector {
    dimension: usize,
    entries: BTreeMap<usize, f64>,
}

impl SparseVector {
    /// Creates an all-zero sparse vector of the given dimension.
    #[must_use]
    pub const fn new(dimension: usize) -> Self {
        Self { dimension, entries: BTreeMap::new() }
    }

    /// Builds a sparse vector from a dense component slice, dropping zeros.
    #[must_use]
    pub fn from_dense(values: &[f64]) -> Self {
        let entries = values
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, value)| *value != 0.0)
            .collect();
        Self { dimension: values.len(), entries }
    }

    /// Builds a sparse vector from `(index, value)` pairs. Zero values are skipped.
    ///
    /// # Panics
    /// Panics if an index is not below `dimension`.
    #[must_use]
    pub fn from_entries<I>(dimension: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let mut vector = Self::new(dimension);
        for (index, value) in entries {
            vector.set(index, value);
        }
        vector
    }
}

impl DoubleVector for SparseVector {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn get(&self, index: usize) -> f64 {
        assert!(
            index < self.dimension,
            "index {index} out of bounds for dimension {}",
            self.dimension
        );
        self.entries.get(&index).copied().unwrap_or(0.0)
    }

    fn set(&mut self, index: usize, value: f64) {
        assert!(
            index < self.dimension,
            "index {index} out of bounds for dimension {}",
            self.dimension
        );
        if value == 0.0 {
            self.entries.remove(&index);
        } else {
            self.entries.insert(index, value);
        }
    }

    fn is_sparse(&self) -> bool {
        true
    }

    fn length(&self) -> usize {
        self.entries.len()
    }

    fn iter_non_zero(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().map(|(index, value)| (*index, *value))
    }
}
