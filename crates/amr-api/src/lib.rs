//! amr-api library root.
//!
//! Exposes the router, config and handlers so that integration tests can
//! exercise them without binding a socket.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/indicators", get(routes::indicators::list_indicators))
        .route(
            "/indicators/{id}",
            get(routes::indicators::get_indicator_detail),
        )
        .route("/antibiogram", get(routes::antibiogram::get_antibiogram))
        .route(
            "/antibiogram/prepare",
            post(routes::antibiogram::prepare),
        )
        .route(
            "/antibiogram/options/{list}",
            get(routes::antibiogram::options),
        )
        .route("/rollup", post(routes::rollup::rollup))
        .route("/rates/percentage", post(routes::rates::percentage))
        .route("/regions/summary", get(routes::regions::summary))
        .route("/regions/taluks", get(routes::regions::taluks))
        .route("/selection/toggle", post(routes::selection::toggle))
        .route("/selection/default", post(routes::selection::seed))
        .route("/asha/summary", post(routes::asha::summary))
        .route("/asha/dashboard", get(routes::asha::dashboard))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
