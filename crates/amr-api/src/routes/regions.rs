use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use amr_analytics::scope::{Scope, ScopeSummary, summarize_scope, taluks_in_scope};
use amr_core::models::entity::Entity;

use crate::error::ApiError;
use crate::state::AppState;

/// The district dashboard's two selectors; `all` or absent means every one.
#[derive(Debug, Default, Deserialize)]
pub struct ScopeQuery {
    pub district: Option<String>,
    pub taluk: Option<String>,
}

impl ScopeQuery {
    pub fn scope(&self) -> Scope {
        Scope::from_selectors(self.district.as_deref(), self.taluk.as_deref())
    }
}

pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<ScopeSummary>, ApiError> {
    Ok(Json(summarize_scope(&state.regions, &query.scope())?))
}

#[derive(Debug, Serialize)]
pub struct TaluksResponse {
    pub taluks: Vec<Entity>,
}

pub async fn taluks(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<TaluksResponse>, ApiError> {
    let taluks = taluks_in_scope(&state.regions, &query.scope())?
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(TaluksResponse { taluks }))
}
