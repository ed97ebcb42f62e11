use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single charted point: x-axis label and integer value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// X-axis label: a build display name or a formatted date.
    pub label: String,
    /// Measured or averaged count at this point.
    pub value: i64,
}

/// Chart-ready output: one ordered point sequence per level id.
///
/// Points within a level are ascending by the underlying build number or
/// date; the engine appends them in that order. Level ids iterate in
/// lexicographic order. This is the only artifact an aggregation call
/// returns; serialization for a presentation layer is the caller's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDataset {
    series: BTreeMap<String, Vec<ChartPoint>>,
}

impl ChartDataset {
    /// Creates an empty dataset (no levels, no points).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point to the series identified by `level_id`.
    pub fn add(&mut self, level_id: impl Into<String>, label: impl Into<String>, value: i64) {
        self.series.entry(level_id.into()).or_default().push(ChartPoint {
            label: label.into(),
            value,
        });
    }

    /// Level ids present in the dataset, in lexicographic order.
    pub fn level_ids(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Points recorded for `level_id`, if that level exists.
    #[must_use]
    pub fn points(&self, level_id: &str) -> Option<&[ChartPoint]> {
        self.series.get(level_id).map(Vec::as_slice)
    }

    /// Number of level series in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the dataset holds no levels at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
