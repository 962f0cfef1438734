use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The sum of one numeric field for one category, across all periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AggregatedTotal {
    pub category: String,
    pub total: f64,
}
