//! Combining one indicator across several entities.
//!
//! Two strategies exist. Pooling sums the raw numerator and denominator
//! counts and divides once; it is used whenever every entity carries raw
//! counts. Otherwise each entity's `current` value is weighted by its
//! surveyed population.

use amr_core::models::entity::Entity;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::rate::{finite_or_zero, percentage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AggregationStrategy {
    PooledCounts,
    PopulationWeighted,
    /// A single entity's own value, nothing combined.
    EntityValue,
}

/// One indicator combined across entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndicatorRollup {
    pub indicator_id: String,
    pub value: f64,
    pub strategy: AggregationStrategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerator: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denominator: Option<f64>,
}

/// `Σ(value · weight) / Σ(weight)`.
///
/// A missing value counts as 0. A missing, zero or non-finite weight counts
/// as 1 so entities without population data still contribute. Returns 0 when
/// the weights sum to 0.
pub fn weighted_average<T>(
    entities: &[T],
    value: impl Fn(&T) -> Option<f64>,
    weight: impl Fn(&T) -> Option<f64>,
) -> f64 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for entity in entities {
        let w = match weight(entity) {
            Some(w) if w.is_finite() && w != 0.0 => w,
            _ => 1.0,
        };
        let v = value(entity).map(finite_or_zero).unwrap_or(0.0);
        weighted_sum += v * w;
        total_weight += w;
    }

    if total_weight == 0.0 {
        return 0.0;
    }
    finite_or_zero(weighted_sum / total_weight)
}

/// Sum of one raw count across entities; missing counts are 0.
pub fn sum_raw_counts<T>(entities: &[T], count: impl Fn(&T) -> Option<f64>) -> f64 {
    entities
        .iter()
        .map(|e| count(e).map(finite_or_zero).unwrap_or(0.0))
        .sum()
}

/// Sum numerators and denominators first, then take one percentage.
pub fn pooled_rate<T>(
    entities: &[T],
    numerator: impl Fn(&T) -> Option<f64>,
    denominator: impl Fn(&T) -> Option<f64>,
) -> f64 {
    percentage(
        sum_raw_counts(entities, numerator),
        sum_raw_counts(entities, denominator),
    )
}

/// Combine `indicator_id` across `entities`, pooling raw counts when every
/// entity has them and falling back to a population-weighted mean of
/// `current` otherwise.
pub fn combine_indicator(entities: &[&Entity], indicator_id: &str) -> IndicatorRollup {
    let all_have_counts = !entities.is_empty()
        && entities.iter().all(|e| {
            e.indicator(indicator_id)
                .is_some_and(|i| i.raw_data.is_some())
        });

    if all_have_counts {
        let numerator = sum_raw_counts(entities, |e| {
            e.indicator(indicator_id)
                .and_then(|i| i.raw_data)
                .map(|c| c.numerator)
        });
        let denominator = sum_raw_counts(entities, |e| {
            e.indicator(indicator_id)
                .and_then(|i| i.raw_data)
                .map(|c| c.denominator)
        });
        return IndicatorRollup {
            indicator_id: indicator_id.to_string(),
            value: percentage(numerator, denominator),
            strategy: AggregationStrategy::PooledCounts,
            numerator: Some(numerator),
            denominator: Some(denominator),
        };
    }

    IndicatorRollup {
        indicator_id: indicator_id.to_string(),
        value: weighted_average(
            entities,
            |e| e.indicator(indicator_id).map(|i| i.current),
            |e| e.total_individuals,
        ),
        strategy: AggregationStrategy::PopulationWeighted,
        numerator: None,
        denominator: None,
    }
}
