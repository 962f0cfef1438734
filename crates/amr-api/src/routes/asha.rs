use axum::Json;
use axum::extract::State;
use serde::Serialize;

use amr_analytics::aggregate::{CategoryShare, category_shares, rollup_categories};
use amr_analytics::asha::{AshaCounters, AshaRates, asha_rates};
use amr_source::endpoints::AshaDashboardData;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn summary(Json(counters): Json<AshaCounters>) -> Json<AshaRates> {
    Json(asha_rates(&counters))
}

#[derive(Debug, Serialize)]
pub struct AshaDashboardResponse {
    pub data: AshaDashboardData,
    /// Reported symptoms ranked by case count.
    pub symptom_shares: Vec<CategoryShare>,
}

/// Fetch every MIS dataset for the ASHA dashboard.
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<AshaDashboardResponse>, ApiError> {
    let source = state.source.clone();
    let data = tokio::task::spawn_blocking(move || source.fetch_asha_dashboard()).await??;

    let symptoms = rollup_categories(&data.symptom_categories, "name", "count", &[]);
    Ok(Json(AshaDashboardResponse {
        symptom_shares: category_shares(&symptoms),
        data,
    }))
}
