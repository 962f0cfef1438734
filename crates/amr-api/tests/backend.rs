use amr_api::config::ApiConfig;
use amr_api::routes;
use amr_api::routes::antibiogram::AntibiogramQuery;
use amr_api::state::AppState;
use amr_core::models::filter::DashboardFilter;
use amr_source::RecordSource;
use amr_source::endpoints::OptionList;
use amr_source::error::SourceError;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

/// Serve `app` on an ephemeral local port and return its API base URL.
async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/v1")
}

fn state_for(backend_base_url: String) -> AppState {
    AppState::from_config(&ApiConfig {
        backend_base_url,
        request_timeout_secs: 5,
        ..ApiConfig::default()
    })
    .unwrap()
}

async fn fetch(state: &AppState) -> Result<Vec<amr_core::models::record::RawRecord>, SourceError> {
    let client = state.source.clone();
    tokio::task::spawn_blocking(move || client.fetch_antibiogram(&DashboardFilter::default()))
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn error_status_becomes_bad_gateway() {
    let app = Router::new().route(
        "/api/v1/dashboard",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let state = state_for(spawn_backend(app).await);

    let err = fetch(&state).await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 500, ref endpoint } if endpoint == "/dashboard"));

    let err = routes::antibiogram::get_antibiogram(State(state), Query(AntibiogramQuery::default()))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test(flavor = "multi_thread")]
async fn non_array_body_is_a_decode_error() {
    let app = Router::new().route(
        "/api/v1/dashboard",
        get(|| async { Json(json!({ "not": "an array" })) }),
    );
    let state = state_for(spawn_backend(app).await);

    let err = fetch(&state).await.unwrap_err();
    assert!(matches!(err, SourceError::Decode { .. }));

    let err = routes::antibiogram::get_antibiogram(State(state), Query(AntibiogramQuery::default()))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test(flavor = "multi_thread")]
async fn antibiogram_is_prepared_from_backend_rows() {
    let app = Router::new().route(
        "/api/v1/dashboard",
        get(|| async {
            Json(json!([
                { "month": "2024-01-31T18:30:00.000Z", "antibiotic": "Amikacin", "resistant": 1, "total_test": 4 },
                { "month": "2024-01-31T18:30:00.000Z", "antibiotic": "No growth", "total_test": 40 }
            ]))
        }),
    );
    let state = state_for(spawn_backend(app).await);

    let Json(view) =
        routes::antibiogram::get_antibiogram(State(state), Query(AntibiogramQuery::default()))
            .await
            .unwrap();
    assert_eq!(view.top.len(), 1);
    assert_eq!(view.series["Amikacin"].points[0].rate_value, 25.0);
    assert!(view.selection.contains("Amikacin"));
}

#[tokio::test(flavor = "multi_thread")]
async fn failing_mis_endpoint_fails_the_whole_asha_dashboard() {
    let app = Router::new()
        .route(
            "/api/v1/mis/households-completed",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        )
        .route("/api/v1/mis/households-sickness", get(|| async { Json(json!([])) }));
    let state = state_for(spawn_backend(app).await);

    let err = routes::asha::dashboard(State(state)).await.unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test(flavor = "multi_thread")]
async fn dropdown_options_are_passed_through() {
    let app = Router::new().route(
        "/api/v1/organisms",
        get(|| async { Json(json!(["Escherichia coli", "Klebsiella pneumoniae"])) }),
    );
    let state = state_for(spawn_backend(app).await);

    let Json(values) = routes::antibiogram::options(State(state.clone()), Path(OptionList::Organisms))
        .await
        .unwrap();
    assert_eq!(values, ["Escherichia coli", "Klebsiella pneumoniae"]);

    let err = routes::antibiogram::options(State(state), Path(OptionList::Districts))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
}
