use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::indicator::Indicator;

/// The administrative level an entity sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EntityKind {
    District,
    Taluk,
    Phc,
    Asha,
}

/// A named aggregation scope with its survey indicators. Districts carry
/// their taluks as children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Entity {
    pub id: String,
    pub name: String,
    pub kind: EntityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_households: Option<f64>,
    /// Surveyed individuals; the population weight in cross-entity averages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_individuals: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_ashas: Option<u32>,
    #[serde(default)]
    pub indicators: BTreeMap<String, Indicator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Entity>,
}

impl Entity {
    pub fn indicator(&self, id: &str) -> Option<&Indicator> {
        self.indicators.get(id)
    }

    /// Find a direct child by id or display name.
    pub fn child(&self, key: &str) -> Option<&Entity> {
        self.children
            .iter()
            .find(|c| c.id == key || c.name == key)
    }
}
