use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::NaiveDate;
use chrono_tz::Tz;
use trendline_types::{Build, Series, TrendError};

use super::util::add_assign;

/// Groups per-build series by calendar date under `tz` and reduces same-day
/// builds to one averaged vector per date.
///
/// Two-phase reduce: all same-day vectors are summed element-wise first,
/// then each element is divided once by the number of contributing builds
/// using truncating integer division. The division is never applied per
/// pairwise step, so `[5,7]` and `[4,2]` on one day average to `[4,4]`.
/// A date with a single contributing build keeps that build's vector
/// unchanged. Callers relying on precision beyond integer counts must
/// pre-scale their series.
///
/// # Errors
/// Returns `Err(TrendError::SeriesLength)` if vectors of different lengths
/// meet on one date.
///
/// ```
/// use std::collections::BTreeMap;
/// use trendline_core::{Build, average_by_date};
///
/// let day_ms = 86_400_000;
/// let per_build = BTreeMap::from([
///     (Build::new(1, day_ms), vec![5, 7]),
///     (Build::new(2, day_ms + 3_600_000), vec![4, 2]),
/// ]);
///
/// let per_date = average_by_date(&per_build, chrono_tz::UTC).unwrap();
/// let averaged: Vec<&[i64]> = per_date.values().map(|s| s.as_slice()).collect();
/// assert_eq!(averaged, vec![&[4, 4][..]]);
/// ```
pub fn average_by_date(
    per_build: &BTreeMap<Build, Series>,
    tz: Tz,
) -> Result<BTreeMap<NaiveDate, Series>, TrendError> {
    // Phase 1: group by date, keeping a running element-wise sum and the
    // number of contributing builds.
    let mut sums: BTreeMap<NaiveDate, (Series, i64)> = BTreeMap::new();
    for (build, series) in per_build {
        match sums.entry(build.date(tz)) {
            Entry::Vacant(slot) => {
                slot.insert((series.clone(), 1));
            }
            Entry::Occupied(mut slot) => {
                let (sum, count) = slot.get_mut();
                add_assign(sum, series)?;
                *count += 1;
            }
        }
    }

    // Phase 2: one truncating division per element, after the full sum.
    Ok(sums
        .into_iter()
        .map(|(date, (sum, count))| (date, sum.into_iter().map(|total| total / count).collect()))
        .collect())
}
