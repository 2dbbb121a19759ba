use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or updating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O error while reading or writing the settings file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML for these settings
    #[error("Invalid settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Region code that is not in the region table
    #[error("Unknown region code: {0}")]
    UnknownRegion(String),

    /// Key that `set` does not know about
    #[error("Unknown setting: {0}")]
    UnknownKey(String),

    /// Value that does not fit the key
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

impl SettingsError {
    pub fn invalid_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
