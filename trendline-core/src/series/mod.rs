//! Trend assembly pipeline.
//!
//! Modules include:
//! - `collect`: selection window + per-build series extraction
//! - `daily`: same-day averaging under a fixed time zone
//! - `dataset`: rendering sorted index maps into `ChartDataset`
//! - `merge`: cross-history aggregation with carry-forward

/// Selection window and per-build series collection.
pub mod collect;
/// Same-day averaging of per-build series.
pub mod daily;
/// Rendering of sorted index maps into the chart model.
pub mod dataset;
/// Cross-history merging with carry-forward.
pub mod merge;
mod util;
mod window;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use trendline_types::{Build, ChartConfig, ChartDataset, Series, TrendError};

use crate::age::AgePolicy;
use crate::extractor::SeriesExtractor;

/// Builds the chart dataset for a single history.
///
/// `history` must yield builds newest-first. Dispatches on
/// `config.use_build_date_as_domain`: either one point per build number, or
/// one point per calendar date with same-day builds averaged under
/// `config.time_zone`. An empty history produces an empty dataset, not an
/// error.
///
/// # Errors
/// - `TrendError::InvalidConfig` if the count cutoff is zero.
/// - `TrendError::Extractor` if the extractor fails for an admitted build.
/// - `TrendError::SeriesLength` if the extractor produces vectors of
///   different lengths.
pub fn chart_dataset<H, A, E>(
    config: &ChartConfig,
    age: &A,
    history: H,
    extractor: &E,
) -> Result<ChartDataset, TrendError>
where
    H: IntoIterator<Item = Build>,
    A: AgePolicy + ?Sized,
    E: SeriesExtractor + ?Sized,
{
    let per_build = collect::collect_series(config, age, history, extractor)?;
    if config.use_build_date_as_domain {
        let per_date = daily::average_by_date(&per_build, config.time_zone)?;
        dataset::per_date_dataset(&per_date, extractor)
    } else {
        dataset::per_build_dataset(&per_build, extractor)
    }
}

/// One build history paired with its own selection settings, for
/// cross-history aggregation.
pub struct TrendSource<'a, H> {
    /// Selection and domain settings applied to this history.
    pub config: ChartConfig,
    /// Age policy applied to this history's builds.
    pub age: &'a dyn AgePolicy,
    /// Newest-first builds of this history.
    pub history: H,
}

/// Builds one combined per-date dataset across several histories.
///
/// Each history is collected and date-averaged under its own configuration,
/// then the per-history averages are merged with carry-forward (see
/// [`merge_date_averages`](merge::merge_date_averages)) and rendered
/// chronologically. All histories must share the extractor's vector length
/// and level meaning.
///
/// # Errors
/// Propagates the same errors as [`chart_dataset`], plus
/// `TrendError::SeriesLength` when histories disagree on vector length.
pub fn aggregated_chart_dataset<'a, H, E>(
    sources: impl IntoIterator<Item = TrendSource<'a, H>>,
    extractor: &E,
) -> Result<ChartDataset, TrendError>
where
    H: IntoIterator<Item = Build>,
    E: SeriesExtractor + ?Sized,
{
    let mut averages: Vec<BTreeMap<NaiveDate, Series>> = Vec::new();
    for source in sources {
        let per_build =
            collect::collect_series(&source.config, source.age, source.history, extractor)?;
        averages.push(daily::average_by_date(&per_build, source.config.time_zone)?);
    }
    let merged = merge::merge_date_averages(&averages)?;
    dataset::per_date_dataset(&merged, extractor)
}
