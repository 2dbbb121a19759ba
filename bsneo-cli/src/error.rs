use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Unknown or unsupported system name
    #[error("Unknown system: {0}")]
    UnknownSystem(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Export aborted before the catalog was written
    #[error("Export failed: {0}")]
    Export(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn unknown_system(msg: impl Into<String>) -> Self {
        Self::UnknownSystem(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<bsneo_lib::SettingsError> for CliError {
    fn from(e: bsneo_lib::SettingsError) -> Self {
        Self::config(e.to_string())
    }
}

impl From<bsneo_frontend::FrontendError> for CliError {
    fn from(e: bsneo_frontend::FrontendError) -> Self {
        Self::export(e.to_string())
    }
}
