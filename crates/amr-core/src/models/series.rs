use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One point on a trend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimeSeriesPoint {
    pub period: jiff::Timestamp,
    /// Percentage, always finite. Nominally 0–100 but never clamped.
    pub rate_value: f64,
    pub sample_size: f64,
}

/// All points for one category, sorted ascending by period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Series {
    pub category: String,
    pub points: Vec<TimeSeriesPoint>,
}
