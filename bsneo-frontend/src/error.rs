use std::path::PathBuf;

use bsneo_core::SourceError;

/// Errors that can occur while exporting a catalog.
///
/// Any of these aborts the export before the catalog file is written.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Destination path is a directory: {}", .0.display())]
    DestinationIsDirectory(PathBuf),

    #[error("Existing catalog belongs to system '{found}', not '{expected}'")]
    WrongSystem { expected: String, found: String },

    #[error("Malformed catalog at line {line}: {reason}")]
    MalformedCatalog { line: usize, reason: String },

    #[error("Metadata store error: {0}")]
    Source(#[from] SourceError),
}

impl FrontendError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedCatalog {
            line,
            reason: reason.into(),
        }
    }

    pub fn wrong_system(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::WrongSystem {
            expected: expected.into(),
            found: found.into(),
        }
    }
}
