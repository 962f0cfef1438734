use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Changes smaller than this (in percentage points) are reported as stable.
pub const STABLE_CHANGE_EPSILON: f64 = 0.05;

/// The raw numerator/denominator counts an indicator was computed from,
/// e.g. antibiotic users without a doctor's consultation over all antibiotic
/// users.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawCounts {
    pub numerator: f64,
    pub denominator: f64,
}

/// A survey indicator value for one entity (district, taluk, PHC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Indicator {
    pub name: String,
    pub current: f64,
    pub previous: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_data: Option<RawCounts>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Indicator {
    /// Percentage-point change since the previous survey round.
    pub fn change(&self) -> f64 {
        self.current - self.previous
    }

    pub fn trend(&self) -> Trend {
        let change = self.change();
        if change > STABLE_CHANGE_EPSILON {
            Trend::Increasing
        } else if change < -STABLE_CHANGE_EPSILON {
            Trend::Decreasing
        } else {
            Trend::Stable
        }
    }
}
