use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid backend base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("backend request to {endpoint} failed: {message}")]
    Network { endpoint: String, message: String },

    #[error("backend returned HTTP {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("could not decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}
