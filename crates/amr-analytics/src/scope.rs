//! District dashboard scoping: which entities are in view for the district
//! and taluk selectors, and the headline numbers for that view.

use std::collections::BTreeMap;

use amr_core::models::entity::Entity;
use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::error::AnalyticsError;
use crate::rate::finite_or_zero;
use crate::weighted::{AggregationStrategy, IndicatorRollup, combine_indicator};
use crate::{DEFAULT_CONSISTENCY_TOLERANCE, all_indicators};

/// Selector value meaning "no restriction".
pub const ALL: &str = "all";

/// What the district and taluk selectors currently point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum Scope {
    All,
    District { district: String },
    /// A taluk, looked up in `district` or in every district when `None`.
    Taluk {
        district: Option<String>,
        taluk: String,
    },
}

impl Scope {
    /// Build a scope from the two selector values; `"all"` or an empty
    /// value means no restriction.
    pub fn from_selectors(district: Option<&str>, taluk: Option<&str>) -> Self {
        let pick = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
                .map(str::to_string)
        };
        match (pick(district), pick(taluk)) {
            (district, Some(taluk)) => Scope::Taluk { district, taluk },
            (Some(district), None) => Scope::District { district },
            (None, None) => Scope::All,
        }
    }
}

/// Headline numbers for the entities in a scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScopeSummary {
    pub scope: Scope,
    pub entity_count: usize,
    pub total_households: f64,
    pub total_individuals: f64,
    pub active_ashas: u64,
    pub indicators: BTreeMap<String, IndicatorRollup>,
}

/// The entities in view: every district, one district, or one taluk.
pub fn resolve_scope<'a>(
    districts: &'a [Entity],
    scope: &Scope,
) -> Result<Vec<&'a Entity>, AnalyticsError> {
    match scope {
        Scope::All => Ok(districts.iter().collect()),
        Scope::District { district } => find_district(districts, district).map(|d| vec![d]),
        Scope::Taluk { district, taluk } => {
            let found = match district {
                Some(district) => find_district(districts, district)?.child(taluk),
                None => districts.iter().find_map(|d| d.child(taluk)),
            };
            found
                .map(|t| vec![t])
                .ok_or_else(|| AnalyticsError::UnknownTaluk(taluk.clone()))
        }
    }
}

/// Every taluk in view: all taluks of all districts for `Scope::All`, the
/// taluks of one district, or the single selected taluk.
pub fn taluks_in_scope<'a>(
    districts: &'a [Entity],
    scope: &Scope,
) -> Result<Vec<&'a Entity>, AnalyticsError> {
    match scope {
        Scope::All => Ok(districts.iter().flat_map(|d| d.children.iter()).collect()),
        Scope::District { district } => {
            Ok(find_district(districts, district)?.children.iter().collect())
        }
        Scope::Taluk { .. } => resolve_scope(districts, scope),
    }
}

/// Totals and one value per registered indicator for the scope.
///
/// Only `Scope::All` combines indicators across entities. A single district
/// or taluk reports its own `current` values. Indicators whose stored value
/// disagrees with their raw counts are logged.
pub fn summarize_scope(districts: &[Entity], scope: &Scope) -> Result<ScopeSummary, AnalyticsError> {
    let entities = resolve_scope(districts, scope)?;

    let mut indicators = BTreeMap::new();
    for def in all_indicators() {
        let id = def.id();
        for entity in &entities {
            if let Some(warning) = entity
                .indicator(id)
                .and_then(|ind| def.check_consistency(ind, DEFAULT_CONSISTENCY_TOLERANCE))
            {
                warn!(entity = %entity.id, indicator = id, "{}", warning.message);
            }
        }

        let rollup = match entities.as_slice() {
            [single] if !matches!(scope, Scope::All) => match single.indicator(id) {
                Some(ind) => IndicatorRollup {
                    indicator_id: id.to_string(),
                    value: finite_or_zero(ind.current),
                    strategy: AggregationStrategy::EntityValue,
                    numerator: ind.raw_data.map(|c| c.numerator),
                    denominator: ind.raw_data.map(|c| c.denominator),
                },
                None => continue,
            },
            _ if entities.iter().any(|e| e.indicator(id).is_some()) => {
                combine_indicator(&entities, id)
            }
            _ => continue,
        };
        indicators.insert(id.to_string(), rollup);
    }

    Ok(ScopeSummary {
        scope: scope.clone(),
        entity_count: entities.len(),
        total_households: entities
            .iter()
            .map(|e| e.total_households.map(finite_or_zero).unwrap_or(0.0))
            .sum(),
        total_individuals: entities
            .iter()
            .map(|e| e.total_individuals.map(finite_or_zero).unwrap_or(0.0))
            .sum(),
        active_ashas: entities
            .iter()
            .map(|e| u64::from(e.active_ashas.unwrap_or(0)))
            .sum(),
        indicators,
    })
}

fn find_district<'a>(districts: &'a [Entity], key: &str) -> Result<&'a Entity, AnalyticsError> {
    districts
        .iter()
        .find(|d| d.id == key || d.name == key)
        .ok_or_else(|| AnalyticsError::UnknownDistrict(key.to_string()))
}
