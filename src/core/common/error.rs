use std::fmt;

use crate::core::indexing::ann::AnnTreeError;

/// Crate-wide error: everything that can fail outside of a single tree call,
/// plus tree errors lifted through `?`.
#[derive(Debug)]
pub enum OxiannError {
    Io(std::io::Error),
    Configuration(String),
    Tree(AnnTreeError),
}

impl fmt::Display for OxiannError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO Error: {}", e),
            Self::Configuration(s) => write!(f, "Configuration error: {}", s),
            Self::Tree(e) => write!(f, "Tree Error: {}", e),
        }
    }
}

impl std::error::Error for OxiannError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Tree(e) => Some(e),
            Self::Configuration(_) => None,
        }
    }
}

impl From<std::io::Error> for OxiannError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<AnnTreeError> for OxiannError {
    fn from(err: AnnTreeError) -> Self {
        Self::Tree(err)
    }
}
