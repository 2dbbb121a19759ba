use thiserror::Error;

/// Errors raised while listing or loading stored scrape metadata.
#[derive(Debug, Error)]
pub enum SourceError {
    /// I/O error while reading the metadata store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored document is not valid entry JSON
    #[error("Invalid metadata for {id}: {source}")]
    Json {
        id: String,
        source: serde_json::Error,
    },

    /// No stored document with this id
    #[error("No metadata stored for {0}")]
    NotFound(String),
}

impl SourceError {
    pub fn json(id: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            id: id.into(),
            source,
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }
}
