//! Configuration for selecting builds and shaping the chart domain.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::TrendError;

/// Controls which builds of a history participate in a trend dataset and
/// which chart domain the dataset uses.
///
/// The age cutoff is not part of this configuration: it is an opaque policy
/// supplied separately to the engine's entry points, since callers typically
/// parameterize it with a wall-clock reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Chart along calendar dates instead of build numbers. Same-day builds
    /// are averaged into one point per date.
    pub use_build_date_as_domain: bool,
    /// Upper bound on the number of builds admitted into the window,
    /// newest first. Must be positive when present.
    pub build_count: Option<u32>,
    /// Fixed time zone under which build dates are derived.
    pub time_zone: Tz,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            use_build_date_as_domain: false,
            build_count: None,
            time_zone: chrono_tz::UTC,
        }
    }
}

impl ChartConfig {
    /// Validates the configuration before aggregation starts.
    ///
    /// # Errors
    /// Returns `Err(TrendError::InvalidConfig)` if `build_count` is zero.
    pub fn validate(&self) -> Result<(), TrendError> {
        if self.build_count == Some(0) {
            return Err(TrendError::invalid_config(
                "build count cutoff must be positive",
            ));
        }
        Ok(())
    }
}
