//! Re-export of foundational types from `trendline-types`.
// Consolidated re-exports so downstream crates can depend on `trendline-core` only

pub use trendline_types::{Build, ChartConfig, ChartDataset, ChartPoint, Series, TrendError};
