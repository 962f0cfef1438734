use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::info;
use ureq::Agent;

use crate::error::SourceError;

/// Where the backend lives and how to reach it.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL including the API prefix, e.g. `http://host:3000/api/v1`.
    pub base_url: String,
    /// Bearer token sent with every request when set.
    pub token: Option<String>,
    pub timeout: Duration,
}

/// Blocking JSON client for the backend.
#[derive(Clone)]
pub struct SourceClient {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

/// Build a client from config. The base URL must be absolute http(s).
pub fn build_client(config: &SourceConfig) -> Result<SourceClient, SourceError> {
    let base_url = config.base_url.trim().trim_end_matches('/').to_string();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(SourceError::InvalidBaseUrl(config.base_url.clone()));
    }

    let agent: Agent = Agent::config_builder()
        .timeout_global(Some(config.timeout))
        .build()
        .into();

    Ok(SourceClient {
        agent,
        base_url,
        token: config.token.clone().filter(|t| !t.trim().is_empty()),
    })
}

impl SourceClient {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` with query parameters and decode the JSON body as `T`.
    ///
    /// Non-2xx statuses, transport failures and bodies that do not match `T`
    /// are errors; nothing is retried.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SourceError> {
        let mut request = self.agent.get(self.url_for(path));
        for (key, value) in query {
            request = request.query(*key, *value);
        }
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let mut response = request.call().map_err(|e| match e {
            ureq::Error::StatusCode(status) => SourceError::Status {
                endpoint: path.to_string(),
                status,
            },
            other => SourceError::Network {
                endpoint: path.to_string(),
                message: other.to_string(),
            },
        })?;

        let body = response
            .body_mut()
            .read_json::<T>()
            .map_err(|e| SourceError::Decode {
                endpoint: path.to_string(),
                message: e.to_string(),
            })?;

        info!(endpoint = path, "backend fetch complete");
        Ok(body)
    }
}
