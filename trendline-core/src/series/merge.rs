use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use trendline_types::{Series, TrendError};

use super::util::add_assign;

/// Combines the date-averaged series of several histories into one per-date
/// map, summing contributions element-wise.
///
/// The date domain is the union of all per-history dates, walked in
/// chronological order once per history while threading the history's last
/// known vector:
///
/// - A history with data for the current date contributes that vector and
///   updates its last known value.
/// - A history missing the current date contributes its last known vector,
///   if any prior date had data, so histories building on different
///   schedules still produce a continuous combined trend.
/// - A history that has not yet reported contributes nothing; values are
///   never invented for it.
///
/// A single history merges to its own date-averages unchanged.
///
/// # Errors
/// Returns `Err(TrendError::SeriesLength)` if vectors of different lengths
/// meet on one date.
///
/// ```
/// use std::collections::BTreeMap;
/// use chrono::NaiveDate;
/// use trendline_core::merge_date_averages;
///
/// let day = |d: u32| NaiveDate::from_ymd_opt(2023, 1, d).unwrap();
/// let job_a = BTreeMap::from([(day(1), vec![2, 0])]);
/// let job_b = BTreeMap::from([(day(2), vec![0, 3])]);
///
/// let merged = merge_date_averages([&job_a, &job_b]).unwrap();
/// assert_eq!(merged[&day(1)], vec![2, 0]);
/// // Day 2 carries job A's last known [2, 0] forward on top of job B's own data.
/// assert_eq!(merged[&day(2)], vec![2, 3]);
/// ```
pub fn merge_date_averages<'a, I>(per_history: I) -> Result<BTreeMap<NaiveDate, Series>, TrendError>
where
    I: IntoIterator<Item = &'a BTreeMap<NaiveDate, Series>>,
{
    let per_history: Vec<&BTreeMap<NaiveDate, Series>> = per_history.into_iter().collect();
    let dates: BTreeSet<NaiveDate> = per_history
        .iter()
        .flat_map(|averages| averages.keys().copied())
        .collect();

    let mut totals: BTreeMap<NaiveDate, Series> = BTreeMap::new();
    for averages in per_history {
        let mut last_known: Option<&Series> = None;
        for date in &dates {
            let contribution = match averages.get(date) {
                Some(series) => {
                    last_known = Some(series);
                    Some(series)
                }
                None => last_known,
            };
            let Some(series) = contribution else {
                continue;
            };
            match totals.entry(*date) {
                Entry::Vacant(slot) => {
                    slot.insert(series.clone());
                }
                Entry::Occupied(mut slot) => add_assign(slot.get_mut(), series)?,
            }
        }
    }
    Ok(totals)
}
