use thiserror::Error;

#[derive(Error, Debug)]
pub enum CapabilityError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Delivery error: {0}")]
    Delivery(String),
    #[error("Unknown {capability} '{name}' (known: {})", .known.join(", "))]
    UnknownCapability {
        capability: String,
        name: String,
        known: Vec<String>,
    },
    #[error("Duplicate {capability} registration '{name}'")]
    DuplicateCapability { capability: String, name: String },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CapabilityError>;
