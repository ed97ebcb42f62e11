use std::collections::BTreeMap;

use trendline_core::SeriesExtractor;
use trendline_types::{Build, Series, TrendError};

mod fixtures;

pub use fixtures::by_job;

/// Severity level names served by [`MockExtractor::with_named_levels`].
pub const LEVELS: [&str; 3] = ["high", "normal", "low"];

/// Newest-first fixture history for `job`, or `None` for unknown jobs.
pub fn history(job: &str) -> Option<Vec<Build>> {
    fixtures::by_job(job).map(|rows| rows.into_iter().map(|(build, _)| build).collect())
}

/// Mock extractor for CI-safe tests. Serves deterministic severity counts
/// keyed by build number.
pub struct MockExtractor {
    series: BTreeMap<u64, Series>,
    fail_on: Option<u64>,
    named_levels: bool,
}

impl MockExtractor {
    /// Extractor over the fixture history of `job` (see [`by_job`]).
    pub fn for_job(job: &str) -> Option<Self> {
        fixtures::by_job(job).map(|rows| {
            Self::from_pairs(
                rows.into_iter()
                    .map(|(build, counts)| (build.number, counts.to_vec())),
            )
        })
    }

    /// Extractor over explicit (build number, series) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u64, Series)>) -> Self {
        Self {
            series: pairs.into_iter().collect(),
            fail_on: None,
            named_levels: false,
        }
    }

    /// Forces a failure when asked for build `number`, for error-path tests.
    #[must_use]
    pub fn fail_on(mut self, number: u64) -> Self {
        self.fail_on = Some(number);
        self
    }

    /// Charts named severity levels ([`LEVELS`]) instead of numeric ids.
    #[must_use]
    pub fn with_named_levels(mut self) -> Self {
        self.named_levels = true;
        self
    }
}

impl SeriesExtractor for MockExtractor {
    fn series(&self, build: &Build) -> Result<Series, TrendError> {
        if self.fail_on == Some(build.number) {
            return Err(TrendError::extractor(build.number, "forced failure"));
        }
        self.series
            .get(&build.number)
            .cloned()
            .ok_or_else(|| TrendError::extractor(build.number, "no fixture series"))
    }

    fn level_id(&self, level: usize) -> String {
        if self.named_levels {
            LEVELS
                .get(level)
                .map_or_else(|| level.to_string(), |name| (*name).to_string())
        } else {
            level.to_string()
        }
    }
}
