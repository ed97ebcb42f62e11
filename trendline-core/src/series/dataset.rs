use std::collections::BTreeMap;

use chrono::NaiveDate;
use trendline_types::{Build, ChartDataset, Series, TrendError};

use super::util::ensure_uniform;
use crate::extractor::SeriesExtractor;

/// Compact month-day label for the date axis.
const DATE_LABEL: &str = "%m-%d";

/// Renders a build-indexed series map into a chart dataset.
///
/// Points are emitted ascending by build number with the build display name
/// as x-label; the series for level position `n` is identified by
/// `extractor.level_id(n)`.
///
/// # Errors
/// Returns `Err(TrendError::SeriesLength)` if the map holds vectors of
/// different lengths. Unequal lengths are a defect of the extractor, never
/// silently truncated.
pub fn per_build_dataset<E>(
    per_build: &BTreeMap<Build, Series>,
    extractor: &E,
) -> Result<ChartDataset, TrendError>
where
    E: SeriesExtractor + ?Sized,
{
    let mut dataset = ChartDataset::new();
    let mut expected_len: Option<usize> = None;
    for (build, series) in per_build {
        ensure_uniform(&mut expected_len, series.len())?;
        for (level, value) in series.iter().enumerate() {
            dataset.add(extractor.level_id(level), build.display_name.clone(), *value);
        }
    }
    Ok(dataset)
}

/// Renders a date-indexed series map into a chart dataset.
///
/// Points are emitted in chronological order with a compact `MM-DD` label.
///
/// # Errors
/// Returns `Err(TrendError::SeriesLength)` if the map holds vectors of
/// different lengths.
pub fn per_date_dataset<E>(
    per_date: &BTreeMap<NaiveDate, Series>,
    extractor: &E,
) -> Result<ChartDataset, TrendError>
where
    E: SeriesExtractor + ?Sized,
{
    let mut dataset = ChartDataset::new();
    let mut expected_len: Option<usize> = None;
    for (date, series) in per_date {
        ensure_uniform(&mut expected_len, series.len())?;
        let label = date.format(DATE_LABEL).to_string();
        for (level, value) in series.iter().enumerate() {
            dataset.add(extractor.level_id(level), label.clone(), *value);
        }
    }
    Ok(dataset)
}
