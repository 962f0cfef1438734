use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Whether the lab dashboard groups results by month or by year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ViewMode {
    #[default]
    Monthly,
    Yearly,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Monthly => "monthly",
            ViewMode::Yearly => "yearly",
        }
    }

    /// Record fields that carry the period, in lookup order. Yearly rows
    /// usually carry `year`; some backends still only send `month`.
    pub fn period_fields(&self) -> &'static [&'static str] {
        match self {
            ViewMode::Monthly => &["month"],
            ViewMode::Yearly => &["year", "month"],
        }
    }
}

/// Filter state of the lab (antibiogram) dashboard. Every change triggers a
/// fresh fetch tagged with the filter that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardFilter {
    pub district: String,
    pub test_name: String,
    /// Empty means all organisms.
    #[serde(default)]
    pub organism: String,
    #[serde(default)]
    pub view_mode: ViewMode,
}

impl Default for DashboardFilter {
    fn default() -> Self {
        Self {
            district: "BENGALURU URBAN".to_string(),
            test_name: "CULTURE AEROBIC BLOOD (AUTOMATED), ADULT".to_string(),
            organism: String::new(),
            view_mode: ViewMode::Monthly,
        }
    }
}
