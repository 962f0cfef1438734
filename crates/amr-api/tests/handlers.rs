use amr_analytics::asha::AshaCounters;
use amr_analytics::error::AnalyticsError;
use amr_api::config::ApiConfig;
use amr_api::error::ApiError;
use amr_api::routes;
use amr_api::state::AppState;
use amr_core::models::selection::Selection;
use amr_source::error::SourceError;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

fn state_with_regions(dir: &tempfile::TempDir) -> AppState {
    let path = dir.path().join("regions.json");
    std::fs::write(
        &path,
        json!([{
            "id": "dharwad",
            "name": "Dharwad",
            "kind": "district",
            "total_individuals": 1000,
            "indicators": {
                "self_medication": {
                    "name": "Self-Medication Rate",
                    "current": 42.0, "previous": 45.0,
                    "raw_data": { "numerator": 420, "denominator": 1000 }
                }
            },
            "children": [{ "id": "hubli", "name": "Hubli", "kind": "taluk" }]
        }])
        .to_string(),
    )
    .unwrap();

    let config = ApiConfig {
        regions_path: Some(path),
        ..ApiConfig::default()
    };
    AppState::from_config(&config).unwrap()
}

#[test]
fn router_builds() {
    let dir = tempfile::tempdir().unwrap();
    let _ = amr_api::router(state_with_regions(&dir));
}

#[tokio::test]
async fn toggle_adds_and_removes() {
    let req: routes::selection::ToggleRequest =
        serde_json::from_value(json!({ "selection": ["Pen"], "category": "Cef" })).unwrap();
    let Json(selection) = routes::selection::toggle(Json(req)).await;
    assert_eq!(selection.iter().collect::<Vec<_>>(), ["Cef", "Pen"]);

    let req: routes::selection::ToggleRequest =
        serde_json::from_value(json!({ "category": "Pen" })).unwrap();
    let Json(selection) = routes::selection::toggle(Json(req)).await;
    assert_eq!(selection, Selection::new().with("Pen"));
}

#[tokio::test]
async fn seed_defaults_to_three() {
    let req: routes::selection::SeedRequest = serde_json::from_value(json!({
        "ranked": [
            { "category": "A", "total": 4 },
            { "category": "B", "total": 3 },
            { "category": "C", "total": 2 },
            { "category": "D", "total": 1 }
        ]
    }))
    .unwrap();
    let Json(selection) = routes::selection::seed(Json(req)).await;
    assert_eq!(selection.len(), 3);
    assert!(!selection.contains("D"));
}

#[tokio::test]
async fn percentage_guards_zero_denominator() {
    let req = routes::rates::PercentageRequest {
        numerator: 5.0,
        denominator: 0.0,
    };
    assert_eq!(routes::rates::percentage(Json(req)).await.0.rate, 0.0);

    let req = routes::rates::PercentageRequest {
        numerator: 1.0,
        denominator: 4.0,
    };
    assert_eq!(routes::rates::percentage(Json(req)).await.0.rate, 25.0);
}

#[tokio::test]
async fn rollup_excludes_no_growth_by_default() {
    let req: routes::rollup::RollupRequest = serde_json::from_value(json!({
        "records": [
            { "organism": "E. coli", "count": 3 },
            { "organism": "No Growth", "count": 50 },
            { "organism": "Klebsiella", "count": 1 }
        ],
        "category_field": "organism",
        "value_field": "count"
    }))
    .unwrap();
    let Json(resp) = routes::rollup::rollup(Json(req)).await;

    let names: Vec<&str> = resp.totals.iter().map(|t| t.category.as_str()).collect();
    assert_eq!(names, ["E. coli", "Klebsiella"]);
    assert_eq!(resp.totals[0].share, 75.0);
}

#[tokio::test]
async fn asha_summary_computes_rates() {
    let counters: AshaCounters = serde_json::from_value(json!({
        "assigned_households": 150,
        "completed_households": 142
    }))
    .unwrap();
    let Json(rates) = routes::asha::summary(Json(counters)).await;
    assert!((rates.survey_progress - 94.67).abs() < 0.01);
    assert_eq!(rates.sickness, 0.0);
}

#[tokio::test]
async fn indicator_detail_and_missing_indicator() {
    let Json(found) = routes::indicators::get_indicator_detail(Path("completion_rate".to_string()))
        .await
        .unwrap();
    assert_eq!(found.source_questions, ["Q21"]);

    let err = routes::indicators::get_indicator_detail(Path("nope".to_string()))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

    let Json(all) = routes::indicators::list_indicators().await;
    assert_eq!(all.len(), 8);
}

#[tokio::test]
async fn region_summary_and_unknown_district() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_with_regions(&dir);

    let Json(summary) = routes::regions::summary(
        State(state.clone()),
        Query(routes::regions::ScopeQuery::default()),
    )
    .await
    .unwrap();
    assert_eq!(summary.entity_count, 1);
    assert!((summary.indicators["self_medication"].value - 42.0).abs() < 1e-9);

    let Json(taluks) = routes::regions::taluks(
        State(state.clone()),
        Query(routes::regions::ScopeQuery {
            district: Some("Dharwad".to_string()),
            taluk: None,
        }),
    )
    .await
    .unwrap();
    assert_eq!(taluks.taluks.len(), 1);

    let err = routes::regions::summary(
        State(state),
        Query(routes::regions::ScopeQuery {
            district: Some("mysuru".to_string()),
            taluk: None,
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn prepare_uses_configured_limits() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_with_regions(&dir);
    let req: routes::antibiogram::PrepareRequest = serde_json::from_value(json!({
        "records": [
            { "month": "2024-01-01", "antibiotic": "A", "resistant": 1, "total_test": 2 }
        ]
    }))
    .unwrap();
    let Json(view) = routes::antibiogram::prepare(State(state), Json(req)).await;
    assert_eq!(view.top.len(), 1);
    assert_eq!(view.series["A"].points[0].rate_value, 50.0);
}

#[test]
fn errors_map_to_statuses() {
    let status = |e: ApiError| e.into_response().status();

    assert_eq!(
        status(AnalyticsError::UnknownTaluk("x".into()).into()),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        status(
            SourceError::Status {
                endpoint: "/dashboard".into(),
                status: 500
            }
            .into()
        ),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        status(SourceError::InvalidBaseUrl("x".into()).into()),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        status(ApiError::BadRequest("bad".into())),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn missing_query_values_fall_back_to_dashboard_defaults() {
    let filter = routes::antibiogram::AntibiogramQuery {
        district: Some("MYSURU".to_string()),
        ..Default::default()
    }
    .into_filter();
    assert_eq!(filter.district, "MYSURU");
    assert_eq!(filter.test_name, "CULTURE AEROBIC BLOOD (AUTOMATED), ADULT");
    assert!(filter.organism.is_empty());
}
