use chrono::{DateTime, Duration, Utc};
use trendline_types::Build;

/// Decides whether a build falls outside the configured age window.
///
/// The engine treats the policy as an opaque predicate: builds are offered
/// newest-first, and the first build reported too old closes the window for
/// itself and everything older.
///
/// Plain closures of type `Fn(&Build) -> bool` implement this trait
/// directly.
pub trait AgePolicy {
    /// Returns `true` when `build` is too old to enter the window.
    fn is_too_old(&self, build: &Build) -> bool;
}

impl<F> AgePolicy for F
where
    F: Fn(&Build) -> bool,
{
    fn is_too_old(&self, build: &Build) -> bool {
        self(build)
    }
}

/// Admits every build regardless of age.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAgeCutoff;

impl AgePolicy for NoAgeCutoff {
    fn is_too_old(&self, _build: &Build) -> bool {
        false
    }
}

/// Day-count cutoff evaluated against a fixed reference instant.
///
/// A build is too old when its timestamp lies more than `days` days before
/// the reference instant. [`MaxAge::new`] captures the wall clock once at
/// construction, so every build of one aggregation call is judged against
/// the same boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxAge {
    days: u32,
    now: DateTime<Utc>,
}

impl MaxAge {
    /// Cutoff of `days` days before the current wall-clock time.
    #[must_use]
    pub fn new(days: u32) -> Self {
        Self::at(days, Utc::now())
    }

    /// Cutoff of `days` days before a fixed reference instant.
    #[must_use]
    pub const fn at(days: u32, now: DateTime<Utc>) -> Self {
        Self { days, now }
    }
}

impl AgePolicy for MaxAge {
    fn is_too_old(&self, build: &Build) -> bool {
        build.timestamp() < self.now - Duration::days(i64::from(self.days))
    }
}
