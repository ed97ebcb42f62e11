use std::cell::{Cell, RefCell};

use chrono::{DateTime, Duration, Utc};
use trendline_core::{Build, ChartConfig, MaxAge, NoAgeCutoff, collect_series};
use trendline_types::{Series, TrendError};

const HOUR_MS: i64 = 3_600_000;

/// Builds numbered `1..=count`, one per hour, newest first.
fn newest_first(count: u64) -> Vec<Build> {
    (1..=count)
        .rev()
        .map(|n| Build::new(n, i64::try_from(n).unwrap() * HOUR_MS))
        .collect()
}

fn with_count(build_count: u32) -> ChartConfig {
    ChartConfig {
        build_count: Some(build_count),
        ..ChartConfig::default()
    }
}

fn ones(build: &Build) -> Result<Series, TrendError> {
    let _ = build;
    Ok(vec![1, 1])
}

#[test]
fn count_cutoff_keeps_the_k_newest_builds() {
    let per_build = collect_series(&with_count(3), &NoAgeCutoff, newest_first(5), &ones).unwrap();

    let numbers: Vec<u64> = per_build.keys().map(|b| b.number).collect();
    assert_eq!(numbers, vec![3, 4, 5]);
}

#[test]
fn count_cutoff_larger_than_history_keeps_everything() {
    let per_build = collect_series(&with_count(10), &NoAgeCutoff, newest_first(4), &ones).unwrap();

    assert_eq!(per_build.len(), 4);
}

#[test]
fn extractor_runs_exactly_once_per_admitted_build() {
    let calls: RefCell<Vec<u64>> = RefCell::new(Vec::new());
    let extractor = |b: &Build| -> Result<Series, TrendError> {
        calls.borrow_mut().push(b.number);
        Ok(vec![0])
    };

    collect_series(&with_count(2), &NoAgeCutoff, newest_first(5), &extractor).unwrap();

    assert_eq!(*calls.borrow(), vec![5, 4]);
}

#[test]
fn window_stops_pulling_the_stream_once_full() {
    let pulled = Cell::new(0u64);
    let history = (1..=100u64).rev().map(|n| {
        pulled.set(pulled.get() + 1);
        Build::new(n, i64::try_from(n).unwrap() * HOUR_MS)
    });

    let per_build = collect_series(&with_count(3), &NoAgeCutoff, history, &ones).unwrap();

    assert_eq!(per_build.len(), 3);
    assert_eq!(pulled.get(), 3);
}

#[test]
fn age_cutoff_excludes_the_triggering_build_and_everything_older() {
    let now: DateTime<Utc> = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let day = Duration::days(1);
    // Newest-first: half a day, one and a half days, three days old.
    let history = vec![
        Build::new(3, (now - day / 2).timestamp_millis()),
        Build::new(2, (now - day * 3 / 2).timestamp_millis()),
        Build::new(1, (now - day * 3).timestamp_millis()),
    ];

    let per_build = collect_series(
        &ChartConfig::default(),
        &MaxAge::at(2, now),
        history,
        &ones,
    )
    .unwrap();

    let numbers: Vec<u64> = per_build.keys().map(|b| b.number).collect();
    assert_eq!(numbers, vec![2, 3]);
}

#[test]
fn whichever_cutoff_triggers_first_wins() {
    let now: DateTime<Utc> = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let hour = Duration::hours(1);
    let history: Vec<Build> = (1..=6u64)
        .rev()
        .map(|n| Build::new(n, (now - hour * (7 - i32::try_from(n).unwrap())).timestamp_millis()))
        .collect();

    // Count cutoff of 2 closes the window before any build is too old.
    let by_count = collect_series(&with_count(2), &MaxAge::at(30, now), history.clone(), &ones)
        .unwrap();
    assert_eq!(by_count.len(), 2);

    // An age policy rejecting everything 3 hours old or older stops first.
    let age = |b: &Build| b.timestamp() <= now - hour * 3;
    let by_age = collect_series(&with_count(5), &age, history, &ones).unwrap();
    let numbers: Vec<u64> = by_age.keys().map(|b| b.number).collect();
    assert_eq!(numbers, vec![5, 6]);
}

#[test]
fn empty_history_is_empty_not_an_error() {
    let per_build = collect_series(&ChartConfig::default(), &NoAgeCutoff, Vec::new(), &ones)
        .unwrap();

    assert!(per_build.is_empty());
}

#[test]
fn zero_count_cutoff_is_rejected_before_any_extraction() {
    let calls = Cell::new(0u32);
    let extractor = |_: &Build| -> Result<Series, TrendError> {
        calls.set(calls.get() + 1);
        Ok(vec![0])
    };

    let err = collect_series(&with_count(0), &NoAgeCutoff, newest_first(3), &extractor)
        .expect_err("zero cutoff must be rejected");

    assert!(matches!(err, TrendError::InvalidConfig(_)));
    assert_eq!(calls.get(), 0);
}

#[test]
fn extractor_failure_aborts_the_whole_call() {
    let extractor = |b: &Build| -> Result<Series, TrendError> {
        if b.number == 3 {
            Err(TrendError::extractor(b.number, "parse failed"))
        } else {
            Ok(vec![1])
        }
    };

    let err = collect_series(&ChartConfig::default(), &NoAgeCutoff, newest_first(5), &extractor)
        .expect_err("failure for build 3 must abort");

    assert!(matches!(err, TrendError::Extractor { build: 3, .. }));
}

#[test]
fn inconsistent_series_lengths_fail_fast() {
    let extractor = |b: &Build| -> Result<Series, TrendError> {
        if b.number % 2 == 0 {
            Ok(vec![1, 2])
        } else {
            Ok(vec![1, 2, 3])
        }
    };

    let err = collect_series(&ChartConfig::default(), &NoAgeCutoff, newest_first(5), &extractor)
        .expect_err("mixed lengths must abort");

    assert!(matches!(
        err,
        TrendError::SeriesLength {
            expected: 3,
            actual: 2
        }
    ));
}
