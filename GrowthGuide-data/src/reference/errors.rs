use thiserror::Error;

/// Error type for loading reference data
#[derive(Error, Debug)]
pub enum ReferenceDataError {
    /// The reference file could not be read
    #[error("Failed to read reference data from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or has the wrong shape
    #[error("Failed to parse reference data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but holds unusable data
    #[error("Validation error: {0}")]
    Validation(String),
}
