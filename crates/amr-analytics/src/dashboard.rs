//! The lab (antibiogram) dashboard view, rebuilt from scratch for every
//! accepted record set.

use std::collections::BTreeMap;

use amr_core::models::filter::ViewMode;
use amr_core::models::record::RawRecord;
use amr_core::models::selection::Selection;
use amr_core::models::series::Series;
use amr_core::models::total::AggregatedTotal;
use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use crate::aggregate::{DEFAULT_TOP_LIMIT, NO_GROWTH, compute_top_categories};
use crate::selection::{DEFAULT_SELECTION_COUNT, default_selection};
use crate::series::{SeriesFields, build_time_series};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AntibiogramOptions {
    pub view_mode: ViewMode,
    pub top_limit: usize,
    pub selection_count: usize,
    pub exclude: Vec<String>,
}

impl Default for AntibiogramOptions {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Monthly,
            top_limit: DEFAULT_TOP_LIMIT,
            selection_count: DEFAULT_SELECTION_COUNT,
            exclude: vec![NO_GROWTH.to_string()],
        }
    }
}

/// Everything the antibiogram page draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AntibiogramView {
    /// Antibiotics ranked by number of tests.
    pub top: Vec<AggregatedTotal>,
    /// Resistance trend per antibiotic.
    pub series: BTreeMap<String, Series>,
    /// Initial trend-chart selection, seeded from `top`.
    pub selection: Selection,
}

pub fn prepare_antibiogram(records: &[RawRecord], options: &AntibiogramOptions) -> AntibiogramView {
    let fields = SeriesFields::antibiogram(options.view_mode);
    let exclude: Vec<&str> = options.exclude.iter().map(String::as_str).collect();

    let top = compute_top_categories(
        records,
        &fields.category,
        &fields.total,
        &exclude,
        options.top_limit,
    );
    let series = build_time_series(records, &fields);
    let selection = default_selection(&top, options.selection_count);

    info!(
        records = records.len(),
        categories = top.len(),
        series = series.len(),
        view_mode = options.view_mode.as_str(),
        "antibiogram prepared"
    );

    AntibiogramView {
        top,
        series,
        selection,
    }
}
