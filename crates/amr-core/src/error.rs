use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid period '{value}': {reason}")]
    InvalidPeriod { value: String, reason: String },

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("record is not a JSON object")]
    NotAnObject,
}
