//! Daily Pulse metric tiles.

use serde::{Deserialize, Serialize};

/// A headline metric with a short trend series.
///
/// `value` and `delta` are display strings; only `spark` is numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTile {
    /// Metric name, including its unit.
    pub title: String,
    /// Current value as displayed.
    pub value: String,
    /// Change label, e.g. "+13% vs yesterday".
    pub delta: String,
    /// Trend samples in display order.
    pub spark: Vec<f64>,
}

impl MetricTile {
    /// Creates a metric tile.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        delta: impl Into<String>,
        spark: impl Into<Vec<f64>>,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            delta: delta.into(),
            spark: spark.into(),
        }
    }
}
