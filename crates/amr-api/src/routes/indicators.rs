use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use amr_analytics::error::AnalyticsError;
use amr_analytics::{Polarity, SurveyIndicator, all_indicators, get_indicator};

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct IndicatorSummary {
    pub id: String,
    pub name: String,
    pub formula: String,
    pub source_questions: Vec<String>,
    pub polarity: Polarity,
}

fn summarize(indicator: &dyn SurveyIndicator) -> IndicatorSummary {
    IndicatorSummary {
        id: indicator.id().to_string(),
        name: indicator.name().to_string(),
        formula: indicator.formula().to_string(),
        source_questions: indicator
            .source_questions()
            .iter()
            .map(|q| q.to_string())
            .collect(),
        polarity: indicator.polarity(),
    }
}

pub async fn list_indicators() -> Json<Vec<IndicatorSummary>> {
    Json(all_indicators().iter().map(|i| summarize(i.as_ref())).collect())
}

pub async fn get_indicator_detail(
    Path(id): Path<String>,
) -> Result<Json<IndicatorSummary>, ApiError> {
    let indicator = get_indicator(&id).ok_or(AnalyticsError::UnknownIndicator(id))?;
    Ok(Json(summarize(indicator.as_ref())))
}
