//! Category rollups: group records by a category field, sum a numeric field,
//! rank the groups.

use std::collections::HashMap;

use amr_core::models::record::RawRecord;
use amr_core::models::total::AggregatedTotal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::rate::{finite_or_zero, percentage};

/// Bars shown on the "top antibiotics" chart.
pub const DEFAULT_TOP_LIMIT: usize = 12;

/// Culture results with no organism isolated; never a real category.
pub const NO_GROWTH: &str = "no growth";

/// A category total together with its share of the grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryShare {
    pub category: String,
    pub total: f64,
    pub share: f64,
}

/// Sum `value_field` per category and return the `limit` largest groups.
///
/// Categories are the trimmed value of `category_field`, compared
/// case-sensitively. Blank categories and categories matching `exclude`
/// (case-insensitively) are dropped. Equal totals keep first-seen order.
pub fn compute_top_categories(
    records: &[RawRecord],
    category_field: &str,
    value_field: &str,
    exclude: &[&str],
    limit: usize,
) -> Vec<AggregatedTotal> {
    let mut totals = rollup_categories(records, category_field, value_field, exclude);
    totals.truncate(limit);
    totals
}

/// Every included category with its summed `value_field`, largest first.
pub fn rollup_categories(
    records: &[RawRecord],
    category_field: &str,
    value_field: &str,
    exclude: &[&str],
) -> Vec<AggregatedTotal> {
    let excluded: Vec<String> = exclude.iter().map(|e| e.trim().to_lowercase()).collect();

    let mut totals: Vec<AggregatedTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(category) = category_key(record, category_field) else {
            continue;
        };
        if excluded.contains(&category.to_lowercase()) {
            continue;
        }
        let value = record.number(value_field);
        match index.get(category) {
            Some(&i) => totals[i].total += value,
            None => {
                index.insert(category.to_string(), totals.len());
                totals.push(AggregatedTotal {
                    category: category.to_string(),
                    total: value,
                });
            }
        }
    }

    // A sum that overflowed is no longer a usable total.
    for t in &mut totals {
        t.total = finite_or_zero(t.total);
    }
    // Stable: equal totals stay in first-seen order.
    totals.sort_by(|a, b| b.total.total_cmp(&a.total));
    totals
}

/// Attach each total's percentage of the grand total.
pub fn category_shares(totals: &[AggregatedTotal]) -> Vec<CategoryShare> {
    let grand_total: f64 = totals.iter().map(|t| t.total).sum();
    totals
        .iter()
        .map(|t| CategoryShare {
            category: t.category.clone(),
            total: t.total,
            share: percentage(t.total, grand_total),
        })
        .collect()
}

/// The trimmed, non-blank category of a record.
pub(crate) fn category_key<'a>(record: &'a RawRecord, category_field: &str) -> Option<&'a str> {
    let category = record.text(category_field)?.trim();
    (!category.is_empty()).then_some(category)
}
