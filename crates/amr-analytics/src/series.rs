//! Per-category trend series for the resistance line chart.

use std::collections::BTreeMap;

use amr_core::error::CoreError;
use amr_core::models::filter::ViewMode;
use amr_core::models::record::RawRecord;
use amr_core::models::selection::Selection;
use amr_core::models::series::{Series, TimeSeriesPoint};
use amr_core::period::{parse_period, period_from_year};
use jiff::Timestamp;
use serde_json::Value;
use tracing::warn;

use crate::aggregate::category_key;
use crate::rate::percentage;

/// Which record fields a series is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesFields {
    pub category: String,
    /// Period fields, first present one wins.
    pub period: Vec<String>,
    /// Explicit percentage provided by the backend.
    pub rate: String,
    /// Count used to derive the rate when no explicit one is usable.
    pub count: String,
    /// Sample size; the rate denominator.
    pub total: String,
}

impl SeriesFields {
    /// Field layout of the lab antibiogram rows:
    /// `{ month|year, antibiotic, resistant, total_test, resistant_percent }`.
    pub fn antibiogram(view_mode: ViewMode) -> Self {
        Self {
            category: "antibiotic".to_string(),
            period: view_mode
                .period_fields()
                .iter()
                .map(|f| f.to_string())
                .collect(),
            rate: "resistant_percent".to_string(),
            count: "resistant".to_string(),
            total: "total_test".to_string(),
        }
    }
}

/// Group records by category and build one ascending series per category.
///
/// Records with a blank category are skipped. Records whose period is
/// missing or unparsable are dropped from their series and logged; the rest
/// of the series is kept.
pub fn build_time_series(records: &[RawRecord], fields: &SeriesFields) -> BTreeMap<String, Series> {
    let mut grouped: BTreeMap<String, Vec<TimeSeriesPoint>> = BTreeMap::new();
    let mut dropped = 0usize;

    for record in records {
        let Some(category) = category_key(record, &fields.category) else {
            continue;
        };
        let period = match record_period(record, &fields.period) {
            Ok(period) => period,
            Err(e) => {
                warn!(category, error = %e, "dropping series point with unusable period");
                dropped += 1;
                continue;
            }
        };
        grouped
            .entry(category.to_string())
            .or_default()
            .push(TimeSeriesPoint {
                period,
                rate_value: point_rate(record, fields),
                sample_size: record.number(&fields.total),
            });
    }

    if dropped > 0 {
        warn!(dropped, "series built with dropped points");
    }

    grouped
        .into_iter()
        .map(|(category, mut points)| {
            points.sort_by_key(|p| p.period);
            let series = Series {
                category: category.clone(),
                points,
            };
            (category, series)
        })
        .collect()
}

/// Rate for one record: the explicit rate when present, finite and non-zero;
/// otherwise `count / total * 100` when both are present and total > 0;
/// otherwise 0.
pub fn point_rate(record: &RawRecord, fields: &SeriesFields) -> f64 {
    if let Some(rate) = record.number_opt(&fields.rate)
        && rate != 0.0
    {
        return rate;
    }
    match (record.number_opt(&fields.count), record.number_opt(&fields.total)) {
        (Some(count), Some(total)) if total > 0.0 => percentage(count, total),
        _ => 0.0,
    }
}

/// Every distinct period across `series`, ascending. The x-domain of a
/// multi-line chart.
pub fn series_periods<'a>(series: impl IntoIterator<Item = &'a Series>) -> Vec<Timestamp> {
    let mut periods: Vec<Timestamp> = series
        .into_iter()
        .flat_map(|s| s.points.iter().map(|p| p.period))
        .collect();
    periods.sort();
    periods.dedup();
    periods
}

/// The series whose category is in `selection`.
pub fn selected_series<'a>(
    series: &'a BTreeMap<String, Series>,
    selection: &Selection,
) -> Vec<&'a Series> {
    series
        .values()
        .filter(|s| selection.contains(&s.category))
        .collect()
}

fn record_period(record: &RawRecord, period_fields: &[String]) -> Result<Timestamp, CoreError> {
    let source = period_fields
        .iter()
        .find(|f| record.is_present(f))
        .and_then(|f| record.get(f))
        .ok_or_else(|| CoreError::MissingField(period_fields.join("|")))?;

    match source {
        Value::String(s) => parse_period(s),
        Value::Number(n) => match n.as_i64() {
            Some(year) => period_from_year(year),
            None => Err(CoreError::InvalidPeriod {
                value: n.to_string(),
                reason: "numeric period must be a whole year".to_string(),
            }),
        },
        other => Err(CoreError::InvalidPeriod {
            value: other.to_string(),
            reason: "unsupported period type".to_string(),
        }),
    }
}
