use thiserror::Error;

/// Storage-level errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Stored value is present but is not what we serialized
    #[error("Parse error in '{key}': {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Storage backend error: {0}")]
    Backend(String),
}
