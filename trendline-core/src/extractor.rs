use trendline_types::{Build, Series, TrendError};

/// Computes the series to chart for one build.
///
/// Implementations are supplied per use case (e.g. "counts of high, normal,
/// and low severity findings for this build"); the engine is polymorphic
/// over them and invokes [`series`](Self::series) exactly once per build
/// admitted into the selection window. All vectors produced within one
/// aggregation call must have the same length.
///
/// Plain closures of type `Fn(&Build) -> Result<Series, TrendError>`
/// implement this trait directly.
pub trait SeriesExtractor {
    /// Computes the measurement vector for `build`.
    ///
    /// # Errors
    /// Any error is fatal for the aggregation call that requested it; no
    /// partial dataset is returned.
    fn series(&self, build: &Build) -> Result<Series, TrendError>;

    /// Legend identifier for a level position (0-based).
    ///
    /// Defaults to the decimal form of `level`; override to chart named
    /// levels (e.g. `"high"`, `"normal"`, `"low"`).
    fn level_id(&self, level: usize) -> String {
        level.to_string()
    }
}

impl<F> SeriesExtractor for F
where
    F: Fn(&Build) -> Result<Series, TrendError>,
{
    fn series(&self, build: &Build) -> Result<Series, TrendError> {
        self(build)
    }
}
