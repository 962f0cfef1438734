use std::path::{Path, PathBuf};

use amr_analytics::aggregate::DEFAULT_TOP_LIMIT;
use amr_analytics::selection::DEFAULT_SELECTION_COUNT;
use amr_core::models::entity::Entity;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_CONFIG_FILE: &str = "amr-api.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_backend_base_url")]
    pub backend_base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_token: Option<String>,
    /// Added in v1; older configs get the default via migration.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
    #[serde(default = "default_selection")]
    pub default_selection: usize,
    /// JSON file with the district/taluk indicator dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            bind_addr: default_bind_addr(),
            backend_base_url: default_backend_base_url(),
            backend_token: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            top_limit: DEFAULT_TOP_LIMIT,
            default_selection: DEFAULT_SELECTION_COUNT,
            regions_path: None,
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_backend_base_url() -> String {
    "http://localhost:3000/api/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_top_limit() -> usize {
    DEFAULT_TOP_LIMIT
}

fn default_selection() -> usize {
    DEFAULT_SELECTION_COUNT
}

/// `AMR_API_CONFIG`, or `amr-api.json` in the working directory.
pub fn config_path(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    lookup("AMR_API_CONFIG")
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> eyre::Result<ApiConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return Ok(ApiConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(v) => u32::try_from(v)
            .map_err(|_| eyre::eyre!("config_version {v} is out of range"))?,
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: ApiConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: add request_timeout_secs
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("request_timeout_secs")
            .or_insert(serde_json::Value::Number(DEFAULT_TIMEOUT_SECS.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added request_timeout_secs)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &ApiConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// Environment overrides: `AMR_BIND_ADDR`, `AMR_BACKEND_URL`,
/// `AMR_BACKEND_TOKEN`.
pub fn apply_overrides(mut config: ApiConfig, lookup: impl Fn(&str) -> Option<String>) -> ApiConfig {
    if let Some(addr) = lookup("AMR_BIND_ADDR") {
        config.bind_addr = addr;
    }
    if let Some(url) = lookup("AMR_BACKEND_URL") {
        config.backend_base_url = url;
    }
    if let Some(token) = lookup("AMR_BACKEND_TOKEN") {
        config.backend_token = Some(token);
    }
    config
}

/// Read the district dataset: a JSON array of district entities with their
/// taluks as children.
pub fn load_regions(path: &Path) -> eyre::Result<Vec<Entity>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read regions at {}: {e}", path.display()))?;
    let regions: Vec<Entity> = serde_json::from_str(&contents)?;
    tracing::info!(path = %path.display(), districts = regions.len(), "regions loaded");
    Ok(regions)
}
