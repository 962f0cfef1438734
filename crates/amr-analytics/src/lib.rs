//! amr-analytics
//!
//! Chart-preparation pipeline for the stewardship dashboard. Pure functions
//! over in-memory records with no HTTP dependency. Groups, sums and ranks raw
//! lab/survey records, derives guarded percentages, combines indicators
//! across districts and taluks, and tracks which series are selected.

pub mod aggregate;
pub mod asha;
pub mod dashboard;
pub mod error;
pub mod indicators;
pub mod rate;
pub mod scope;
pub mod selection;
pub mod series;
pub mod weighted;

use amr_core::models::indicator::{Indicator, RawCounts};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Percentage points `current` may differ from the rate recomputed from its
/// raw counts before it is reported as inconsistent.
pub const DEFAULT_CONSISTENCY_TOLERANCE: f64 = 0.5;

/// Whether a higher or a lower rate is the desirable direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TargetStatus {
    OnTarget,
    OffTarget,
    NoTarget,
}

/// Reported when an indicator's stored value does not match its raw counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsistencyWarning {
    pub indicator_id: String,
    pub stored: f64,
    pub recomputed: f64,
    pub message: String,
}

/// Trait implemented by each survey indicator shown on the dashboards.
pub trait SurveyIndicator: Send + Sync {
    /// Key of this indicator in an entity's indicator map (e.g. "self_medication").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Self-Medication Rate").
    fn name(&self) -> &str;

    /// The formula as shown in the dashboard's info popover.
    fn formula(&self) -> &str;

    /// Questionnaire items the counts come from (e.g. "Q19").
    fn source_questions(&self) -> &[&'static str];

    fn polarity(&self) -> Polarity;

    /// Rate from raw counts.
    fn rate(&self, counts: &RawCounts) -> f64 {
        rate::percentage_of(counts)
    }

    /// Compare the current value against the indicator's target.
    fn status(&self, indicator: &Indicator) -> TargetStatus {
        let Some(target) = indicator.target else {
            return TargetStatus::NoTarget;
        };
        let met = match self.polarity() {
            Polarity::HigherIsBetter => indicator.current >= target,
            Polarity::LowerIsBetter => indicator.current <= target,
        };
        if met {
            TargetStatus::OnTarget
        } else {
            TargetStatus::OffTarget
        }
    }

    /// Check that `current` agrees with the rate recomputed from raw counts.
    fn check_consistency(
        &self,
        indicator: &Indicator,
        tolerance: f64,
    ) -> Option<ConsistencyWarning> {
        let counts = indicator.raw_data?;
        if counts.denominator <= 0.0 {
            return None;
        }
        let recomputed = self.rate(&counts);
        if (indicator.current - recomputed).abs() <= tolerance {
            return None;
        }
        Some(ConsistencyWarning {
            indicator_id: self.id().to_string(),
            stored: indicator.current,
            recomputed,
            message: format!(
                "{}: stored {:.1}% but {}/{} gives {:.1}%",
                self.name(),
                indicator.current,
                counts.numerator,
                counts.denominator,
                recomputed,
            ),
        })
    }
}

/// Return all registered indicators, in dashboard order.
pub fn all_indicators() -> Vec<Box<dyn SurveyIndicator>> {
    vec![
        Box::new(indicators::usage::AntibioticUsage),
        Box::new(indicators::usage::SelfMedication),
        Box::new(indicators::usage::PrescriptionAvailability),
        Box::new(indicators::usage::CompletionRate),
        Box::new(indicators::usage::RestartWithoutConsultation),
        Box::new(indicators::community::MisuseAwareness),
        Box::new(indicators::community::LongTermIllness),
        Box::new(indicators::community::HealthFacilityPreference),
    ]
}

/// Look up an indicator by ID.
pub fn get_indicator(id: &str) -> Option<Box<dyn SurveyIndicator>> {
    all_indicators().into_iter().find(|i| i.id() == id)
}
