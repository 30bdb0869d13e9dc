// src/core/indexing/ann/result.rs

use std::cmp::Ordering;

/// A search hit: the stored vector, its payload and the distance to the query.
///
/// The natural ordering is by distance **descending**, so that the worst hit
/// sorts first. Sort and then reverse to get nearest-first order.
#[derive(Debug, Clone)]
pub struct VectorDistanceTuple<V, T> {
    vector: V,
    value: Option<T>,
    distance: f64,
}

impl<V, T> VectorDistanceTuple<V, T> {
    pub const fn new(vector: V, value: Option<T>, distance: f64) -> Self {
        Self { vector, value, distance }
    }

    pub const fn vector(&self) -> &V {
        &self.vector
    }

    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Splits the hit into `(vector, payload, distance)`.
    pub fn into_parts(self) -> (V, Option<T>, f64) {
        (self.vector, self.value, self.distance)
    }
}

impl<V, T> PartialEq for VectorDistanceTuple<V, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, T> Eq for VectorDistanceTuple<V, T> {}

impl<V, T> PartialOrd for VectorDistanceTuple<V, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, T> Ord for VectorDistanceTuple<V, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.total_cmp(&self.distance)
    }
}
