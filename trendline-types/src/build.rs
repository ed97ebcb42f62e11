use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Fixed-length vector of integer counts, one entry per category level.
///
/// The length is fixed per use case and must be identical across all builds
/// combined in one aggregation step; the engine rejects mismatches with
/// [`TrendError::SeriesLength`](crate::TrendError::SeriesLength).
pub type Series = Vec<i64>;

/// One recorded build of a tracked job.
///
/// Builds are immutable inputs supplied by the caller. Ordering compares the
/// monotonically increasing `number` first, so sorted collections of builds
/// are ascending by build number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Build {
    /// Monotonically increasing build identity.
    pub number: u64,
    /// Label shown on the build axis of a chart (e.g. "#42").
    pub display_name: String,
    /// Completion instant as epoch milliseconds.
    pub timestamp_millis: i64,
}

impl Build {
    /// Creates a build labelled `#<number>`.
    #[must_use]
    pub fn new(number: u64, timestamp_millis: i64) -> Self {
        Self {
            number,
            display_name: format!("#{number}"),
            timestamp_millis,
        }
    }

    /// Completion instant as a UTC `DateTime`.
    ///
    /// Timestamps outside chrono's representable range clamp to the epoch.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.timestamp_millis).unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Calendar date of the build under the fixed time zone `tz`.
    ///
    /// Used only as a grouping key; dates derived under different zones must
    /// never be compared with each other.
    #[must_use]
    pub fn date(&self, tz: Tz) -> NaiveDate {
        self.timestamp().with_timezone(&tz).date_naive()
    }
}
