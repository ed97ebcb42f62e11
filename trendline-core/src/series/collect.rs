use std::collections::BTreeMap;

use trendline_types::{Build, ChartConfig, Series, TrendError};

use super::util::ensure_uniform;
use super::window::{Admit, Window};
use crate::age::AgePolicy;
use crate::extractor::SeriesExtractor;

/// Runs the selection window over `history` and extracts one series per
/// admitted build.
///
/// `history` must yield builds newest-first. Iteration stops as soon as the
/// window closes, so builds beyond the window are never materialized. The
/// extractor is invoked exactly once per admitted build; the result map is
/// keyed by the build itself and therefore ascending by build number.
///
/// # Errors
/// - `TrendError::InvalidConfig` if the count cutoff is zero.
/// - `TrendError::Extractor` if the extractor fails for any admitted build;
///   no partial map is returned.
/// - `TrendError::SeriesLength` if the extractor produces vectors of
///   different lengths within this call.
///
/// ```
/// use trendline_core::{Build, ChartConfig, NoAgeCutoff, Series, TrendError, collect_series};
///
/// let history = vec![Build::new(3, 3_000), Build::new(2, 2_000), Build::new(1, 1_000)];
/// let config = ChartConfig { build_count: Some(2), ..ChartConfig::default() };
/// let extractor = |b: &Build| -> Result<Series, TrendError> {
///     Ok(vec![i64::try_from(b.number).unwrap(), 0])
/// };
///
/// let per_build = collect_series(&config, &NoAgeCutoff, history, &extractor).unwrap();
/// let numbers: Vec<u64> = per_build.keys().map(|b| b.number).collect();
/// assert_eq!(numbers, vec![2, 3]);
/// ```
pub fn collect_series<H, A, E>(
    config: &ChartConfig,
    age: &A,
    history: H,
    extractor: &E,
) -> Result<BTreeMap<Build, Series>, TrendError>
where
    H: IntoIterator<Item = Build>,
    A: AgePolicy + ?Sized,
    E: SeriesExtractor + ?Sized,
{
    let mut window = Window::open(config, age)?;
    let mut expected_len: Option<usize> = None;
    let mut per_build: BTreeMap<Build, Series> = BTreeMap::new();

    for build in history {
        let admit = window.admit(&build);
        if admit == Admit::Stop {
            break;
        }
        let series = extractor.series(&build)?;
        ensure_uniform(&mut expected_len, series.len())?;
        #[cfg(feature = "tracing")]
        tracing::trace!(build = build.number, levels = series.len(), "collected series");
        per_build.insert(build, series);
        if admit == Admit::IncludeAndStop {
            break;
        }
    }
    Ok(per_build)
}
