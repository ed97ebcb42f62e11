//! trendline-core
//!
//! Aggregation engine turning per-build measurement vectors into chart-ready
//! datasets.
//!
//! - `extractor`: the `SeriesExtractor` seam supplied per use case.
//! - `age`: age-cutoff policies applied by the selection window.
//! - `series`: the assembly pipeline (collect, average, merge, render).
//!
//! The engine is synchronous and single-threaded: one call processes one
//! aggregation request to completion, with no shared state across calls.
//! The only streaming characteristic is the selection window's early
//! termination, which stops consuming a history once the window closes.
#![warn(missing_docs)]

/// Age-cutoff policies applied by the selection window.
pub mod age;
/// The caller-supplied series extraction seam.
pub mod extractor;
/// Trend assembly pipeline: collect, average, merge, render.
pub mod series;
pub mod types;

pub use age::{AgePolicy, MaxAge, NoAgeCutoff};
pub use extractor::SeriesExtractor;
pub use series::collect::collect_series;
pub use series::daily::average_by_date;
pub use series::dataset::{per_build_dataset, per_date_dataset};
pub use series::merge::merge_date_averages;
pub use series::{TrendSource, aggregated_chart_dataset, chart_dataset};
pub use types::*;
