use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShadowPayrollError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Malformed line item [{index}]: {reason}")]
    MalformedLineItem { index: usize, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ShadowPayrollError {
    fn from(e: serde_json::Error) -> Self {
        ShadowPayrollError::SerializationError(e.to_string())
    }
}
