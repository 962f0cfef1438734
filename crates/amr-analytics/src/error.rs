use amr_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),

    #[error("unknown district: {0}")]
    UnknownDistrict(String),

    #[error("unknown taluk: {0}")]
    UnknownTaluk(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
