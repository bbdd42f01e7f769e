//! Error types for frequent itemset mining.

use crate::fp::streaming_growth::ProcessingPhase;

/// Errors reported before or between the passes over a transaction source.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MiningError {
    /// Absolute minimum support below one
    #[error("minimum support must be at least 1, got {0}")]
    InvalidThreshold(usize),

    /// Relative minimum support outside (0, 1]
    #[error("minimum support fraction must be in (0, 1], got {0}")]
    InvalidSupportFraction(f64),

    /// Streaming driver called out of order
    #[error("cannot {operation} in phase {phase:?}")]
    InvalidPhase {
        operation: &'static str,
        phase: ProcessingPhase,
    },

    /// The two passes over a streamed source disagreed on its length
    #[error("build pass saw {built} transactions but count pass saw {counted}")]
    PassMismatch { counted: usize, built: usize },
}

/// Result type for mining operations
pub type Result<T> = std::result::Result<T, MiningError>;
