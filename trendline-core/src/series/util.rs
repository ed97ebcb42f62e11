//! Shared helpers for series arithmetic and length invariants.

use trendline_types::{Series, TrendError};

/// Element-wise add of `rhs` into `acc`.
///
/// # Errors
/// Returns `Err(TrendError::SeriesLength)` if the lengths differ; `acc` is
/// left untouched in that case.
pub(crate) fn add_assign(acc: &mut Series, rhs: &Series) -> Result<(), TrendError> {
    ensure_same_length(acc.len(), rhs.len())?;
    for (a, r) in acc.iter_mut().zip(rhs) {
        *a += *r;
    }
    Ok(())
}

/// Ensures a series length matches the established one.
pub(crate) const fn ensure_same_length(expected: usize, actual: usize) -> Result<(), TrendError> {
    if expected == actual {
        Ok(())
    } else {
        Err(TrendError::series_length(expected, actual))
    }
}

/// Checks `actual` against the first observed series length, establishing it
/// on first use.
pub(crate) fn ensure_uniform(expected: &mut Option<usize>, actual: usize) -> Result<(), TrendError> {
    match *expected {
        Some(e) => ensure_same_length(e, actual),
        None => {
            *expected = Some(actual);
            Ok(())
        }
    }
}
