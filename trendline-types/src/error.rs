use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the trendline workspace.
///
/// All variants are non-recoverable at the engine's level: an aggregation
/// call either returns a fully consistent dataset or fails with one of
/// these. The engine never retries, skips builds, or substitutes defaults.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrendError {
    /// The selection configuration was rejected before any work started.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Two series of different lengths met in one aggregation step.
    ///
    /// This indicates a caller defect (the extractor produced inconsistent
    /// vectors); the aggregation aborts rather than truncating or padding.
    #[error("inconsistent series length: expected {expected}, got {actual}")]
    SeriesLength {
        /// Length established by the first series of the aggregation step.
        expected: usize,
        /// Length of the offending series.
        actual: usize,
    },

    /// The caller-supplied extractor failed for a build.
    #[error("extractor failed for build #{build}: {msg}")]
    Extractor {
        /// Number of the build the extractor was invoked for.
        build: u64,
        /// Human-readable failure message.
        msg: String,
    },
}

impl TrendError {
    /// Helper: build an `InvalidConfig` error from a message.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Helper: build a `SeriesLength` error from the two observed lengths.
    #[must_use]
    pub const fn series_length(expected: usize, actual: usize) -> Self {
        Self::SeriesLength { expected, actual }
    }

    /// Helper: build an `Extractor` error for a build number and message.
    pub fn extractor(build: u64, msg: impl Into<String>) -> Self {
        Self::Extractor {
            build,
            msg: msg.into(),
        }
    }
}
