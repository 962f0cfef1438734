use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PercentageRequest {
    pub numerator: f64,
    pub denominator: f64,
}

#[derive(Debug, Serialize)]
pub struct PercentageResponse {
    pub rate: f64,
}

pub async fn percentage(Json(req): Json<PercentageRequest>) -> Json<PercentageResponse> {
    Json(PercentageResponse {
        rate: amr_analytics::rate::percentage(req.numerator, req.denominator),
    })
}
