// src/core/vector/distance.rs

use crate::core::types::DoubleVector;
use serde::{Deserialize, Serialize};

/// A metric between two vectors of equal dimension.
///
/// Both arguments may use different storage, e.g. a dense hyperrectangle
/// corner measured against a sparse query.
pub trait DistanceMeasure {
    fn measure_distance<A, B>(&self, a: &A, b: &B) -> f64
    where
        A: DoubleVector + ?Sized,
        B: DoubleVector + ?Sized;
}

/// Straight-line (L2) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EuclideanDistance;

impl DistanceMeasure for EuclideanDistance {
    fn measure_distance<A, B>(&self, a: &A, b: &B) -> f64
    where
        A: DoubleVector + ?Sized,
        B: DoubleVector + ?Sized,
    {
        debug_assert_eq!(
            a.dimension(),
            b.dimension(),
            "distance between vectors of different dimension"
        );
        (0..a.dimension()).map(|i| (a.get(i) - b.get(i)).powi(2)).sum::<f64>().sqrt()
    }
}

/// City-block (L1) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManhattanDistance;

impl DistanceMeasure for ManhattanDistance {
    fn measure_distance<A, B>(&self, a: &A, b: &B) -> f64
    where
        A: DoubleVector + ?Sized,
        B: DoubleVector + ?Sized,
    {
        debug_assert_eq!(
            a.dimension(),
            b.dimension(),
            "distance between vectors of different dimension"
        );
        (0..a.dimension()).map(|i| (a.get(i) - b.get(i)).abs()).sum()
    }
}

/// Runtime-selectable metric, used when a tree is built from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Euclidean,
    Manhattan,
}

impl Metric {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
        }
    }
}

impl DistanceMeasure for Metric {
    fn measure_distance<A, B>(&self, a: &A, b: &B) -> f64
    where
        A: DoubleVector + ?Sized,
        B: DoubleVector + ?Sized,
    {
        match self {
            Self::Euclidean => EuclideanDistance.measure_distance(a, b),
            Self::Manhattan => ManhattanDistance.measure_distance(a, b),
        }
    }
}
