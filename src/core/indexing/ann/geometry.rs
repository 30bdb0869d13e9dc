// src/core/indexing/ann/geometry.rs

use crate::core::types::{DenseVector, DoubleVector};

/// Axis-aligned box bounding the region a subtree can cover during search.
///
/// Descending into a child always works on a fresh copy (see
/// [`split_at`](Self::split_at)), so sibling branches never share a box.
#[derive(Debug, Clone, PartialEq)]
pub struct HyperRectangle {
    min: DenseVector,
    max: DenseVector,
}

impl HyperRectangle {
    /// # Panics
    /// Panics if `min` and `max` have different dimensions.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn new(min: DenseVector, max: DenseVector) -> Self {
        assert_eq!(min.dimension(), max.dimension(), "hyperrectangle corners differ in dimension");
        Self { min, max }
    }

    /// The box covering all of space.
    #[must_use]
    pub fn infinite(dimension: usize) -> Self {
        Self {
            min: DenseVector::filled(dimension, f64::NEG_INFINITY),
            max: DenseVector::filled(dimension, f64::INFINITY),
        }
    }

    #[must_use]
    pub const fn min(&self) -> &DenseVector {
        &self.min
    }

    #[must_use]
    pub const fn max(&self) -> &DenseVector {
        &self.max
    }

    /// Cuts the box at `value` on `dimension`, returning the `(left, right)`
    /// halves: the left copy's max and the right copy's min become `value`.
    #[must_use]
    pub fn split_at(&self, dimension: usize, value: f64) -> (Self, Self) {
        let mut left = self.clone();
        let mut right = self.clone();
        left.max.set(dimension, value);
        right.min.set(dimension, value);
        (left, right)
    }

    /// Point inside the box closest to `target`, i.e. `target` clamped into
    /// `[min, max]` on every axis.
    pub fn closest_point<V: DoubleVector + ?Sized>(&self, target: &V) -> DenseVector {
        let mut point = DenseVector::zeros(target.dimension());
        for i in 0..target.dimension() {
            let t = target.get(i);
            let value = if t <= self.min.get(i) {
                self.min.get(i)
            } else if t >= self.max.get(i) {
                self.max.get(i)
            } else {
                t
            };
            point.set(i, value);
        }
        point
    }
}
