use std::sync::Arc;
use std::time::Duration;

use amr_analytics::dashboard::AntibiogramOptions;
use amr_core::models::entity::Entity;
use amr_source::client::{SourceClient, SourceConfig, build_client};

use crate::config::{ApiConfig, load_regions};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub source: SourceClient,
    /// District/taluk indicator dataset, read once at startup.
    pub regions: Arc<Vec<Entity>>,
    pub options: AntibiogramOptions,
}

impl AppState {
    pub fn from_config(config: &ApiConfig) -> eyre::Result<Self> {
        let source = build_client(&SourceConfig {
            base_url: config.backend_base_url.clone(),
            token: config.backend_token.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        })?;

        let regions = match &config.regions_path {
            Some(path) => load_regions(path)?,
            None => {
                tracing::info!("no regions dataset configured; region summaries will be empty");
                Vec::new()
            }
        };

        Ok(Self {
            source,
            regions: Arc::new(regions),
            options: AntibiogramOptions {
                top_limit: config.top_limit,
                selection_count: config.default_selection,
                ..AntibiogramOptions::default()
            },
        })
    }
}
