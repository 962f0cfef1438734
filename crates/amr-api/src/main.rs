use std::env;

use tracing_subscriber::EnvFilter;

use amr_api::config;
use amr_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let lookup = |key: &str| env::var(key).ok();
    let path = config::config_path(lookup);
    let config = config::apply_overrides(config::load_config(&path)?, lookup);

    let state = AppState::from_config(&config)?;
    let app = amr_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, backend = %config.backend_base_url, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
