use axum::Json;
use serde::{Deserialize, Serialize};

use amr_analytics::aggregate::{
    CategoryShare, DEFAULT_TOP_LIMIT, NO_GROWTH, category_shares, compute_top_categories,
};
use amr_core::models::record::RawRecord;

#[derive(Debug, Deserialize)]
pub struct RollupRequest {
    pub records: Vec<RawRecord>,
    pub category_field: String,
    pub value_field: String,
    /// Defaults to `["no growth"]`.
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RollupResponse {
    pub totals: Vec<CategoryShare>,
}

/// Rank categories of arbitrary records by a summed field, with each
/// category's share of the ranked total.
pub async fn rollup(Json(req): Json<RollupRequest>) -> Json<RollupResponse> {
    let exclude = req
        .exclude
        .unwrap_or_else(|| vec![NO_GROWTH.to_string()]);
    let exclude: Vec<&str> = exclude.iter().map(String::as_str).collect();

    let totals = compute_top_categories(
        &req.records,
        &req.category_field,
        &req.value_field,
        &exclude,
        req.limit.unwrap_or(DEFAULT_TOP_LIMIT),
    );
    Json(RollupResponse {
        totals: category_shares(&totals),
    })
}
