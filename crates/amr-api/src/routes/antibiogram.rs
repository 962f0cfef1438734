use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use amr_analytics::dashboard::{AntibiogramOptions, AntibiogramView, prepare_antibiogram};
use amr_core::models::filter::{DashboardFilter, ViewMode};
use amr_core::models::record::RawRecord;
use amr_source::RecordSource;
use amr_source::endpoints::OptionList;

use crate::error::ApiError;
use crate::state::AppState;

/// Lab dashboard filter; absent values fall back to the dashboard defaults.
#[derive(Debug, Default, Deserialize)]
pub struct AntibiogramQuery {
    pub district: Option<String>,
    pub test_name: Option<String>,
    pub organism: Option<String>,
    pub view_mode: Option<ViewMode>,
}

impl AntibiogramQuery {
    pub fn into_filter(self) -> DashboardFilter {
        let defaults = DashboardFilter::default();
        DashboardFilter {
            district: self.district.unwrap_or(defaults.district),
            test_name: self.test_name.unwrap_or(defaults.test_name),
            organism: self.organism.unwrap_or(defaults.organism),
            view_mode: self.view_mode.unwrap_or(defaults.view_mode),
        }
    }
}

/// Fetch lab records for the filter and prepare the antibiogram view.
pub async fn get_antibiogram(
    State(state): State<AppState>,
    Query(query): Query<AntibiogramQuery>,
) -> Result<Json<AntibiogramView>, ApiError> {
    let filter = query.into_filter();
    let view_mode = filter.view_mode;

    let source = state.source.clone();
    let records = tokio::task::spawn_blocking(move || source.fetch_antibiogram(&filter)).await??;

    let options = AntibiogramOptions {
        view_mode,
        ..state.options.clone()
    };
    Ok(Json(prepare_antibiogram(&records, &options)))
}

#[derive(Debug, Deserialize)]
pub struct PrepareRequest {
    pub records: Vec<RawRecord>,
    #[serde(default)]
    pub view_mode: Option<ViewMode>,
}

/// Prepare the antibiogram view from records the caller already holds.
pub async fn prepare(
    State(state): State<AppState>,
    Json(req): Json<PrepareRequest>,
) -> Json<AntibiogramView> {
    let options = AntibiogramOptions {
        view_mode: req.view_mode.unwrap_or_default(),
        ..state.options.clone()
    };
    Json(prepare_antibiogram(&req.records, &options))
}

/// Values for one of the filter dropdowns (`districts`, `test-names`,
/// `organisms`).
pub async fn options(
    State(state): State<AppState>,
    Path(list): Path<OptionList>,
) -> Result<Json<Vec<String>>, ApiError> {
    let source = state.source.clone();
    let values = tokio::task::spawn_blocking(move || source.fetch_options(list)).await??;
    Ok(Json(values))
}
