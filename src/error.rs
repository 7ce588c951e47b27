//! Error types for fuzzy distribution models.

use core::fmt;

/// # Overview
///
/// Errors that can occur when configuring, training or querying a
/// [`Distribution`](crate::Distribution).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingFeatureTerms,
    MissingDependentTerms,
    MissingThreshold,
    InvalidTermCount,
    InvalidThreshold,
    EmptyDataset,
    MissingFeatures,
    DimensionMismatch { expected: usize, got: usize },
    NonFiniteValue { row: usize, column: usize },
    NoMatchingClass,
    EmptyDistribution,
    NoPartitions
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFeatureTerms => write!(f, "feature_terms is required"),
            Self::MissingDependentTerms => write!(f, "dependent_terms is required"),
            Self::MissingThreshold => write!(f, "threshold is required"),
            Self::InvalidTermCount => write!(f, "term count must be > 0"),
            Self::InvalidThreshold => write!(f, "threshold must be finite and >= 0"),
            Self::EmptyDataset => write!(f, "dataset cannot be empty"),
            Self::MissingFeatures => {
                write!(f, "rows need at least one feature before the dependent value")
            }
            Self::DimensionMismatch {
                expected,
                got
            } => {
                write!(f, "dimension mismatch: expected {expected}, got {got}")
            }
            Self::NonFiniteValue {
                row,
                column
            } => {
                write!(f, "non-finite value at row {row}, column {column}")
            }
            Self::NoMatchingClass => write!(f, "no class within distance threshold"),
            Self::EmptyDistribution => write!(f, "membership distribution sums to zero"),
            Self::NoPartitions => write!(f, "distribution has no fuzzy partitions")
        }
    }
}

impl std::error::Error for Error {}

/// # Overview
///
/// Result type for fuzzy distribution operations.
pub type Result<T> = core::result::Result<T, Error>;
