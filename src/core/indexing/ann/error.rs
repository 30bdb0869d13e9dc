// src/core/indexing/ann/error.rs

/// Precondition failures raised by the ANN trees.
///
/// None of these are transient: the tree is left untouched and the caller
/// has to fix its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnTreeError {
    /// Zero-dimension vector passed to an insert or a query.
    InvalidVector(String),
    /// Vector dimension differs from the one fixed by the first insert.
    DimensionMismatch { expected: usize, actual: usize },
    /// A split policy picked an axis outside `[0, dimension)`.
    InvalidSplitDimension { index: usize, dimension: usize },
}

impl std::fmt::Display for AnnTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVector(msg) => write!(f, "Invalid vector: {msg}"),
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "Dimensional mismatch between vector and tree: expected {expected}, got {actual}"
            ),
            Self::InvalidSplitDimension { index, dimension } => write!(
                f,
                "Split policy returned invalid index {index} for dimension {dimension}"
            ),
        }
    }
}

impl std::error::Error for AnnTreeError {}

pub type AnnResult<T> = Result<T, AnnTreeError>;
