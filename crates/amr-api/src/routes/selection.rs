use axum::Json;
use serde::Deserialize;

use amr_analytics::selection::{DEFAULT_SELECTION_COUNT, default_selection, toggle as toggle_selection};
use amr_core::models::selection::Selection;
use amr_core::models::total::AggregatedTotal;

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    #[serde(default)]
    pub selection: Selection,
    pub category: String,
}

pub async fn toggle(Json(req): Json<ToggleRequest>) -> Json<Selection> {
    Json(toggle_selection(&req.selection, &req.category))
}

#[derive(Debug, Deserialize)]
pub struct SeedRequest {
    pub ranked: Vec<AggregatedTotal>,
    #[serde(default)]
    pub count: Option<usize>,
}

pub async fn seed(Json(req): Json<SeedRequest>) -> Json<Selection> {
    Json(default_selection(
        &req.ranked,
        req.count.unwrap_or(DEFAULT_SELECTION_COUNT),
    ))
}
