//! Application settings (`settings.toml`).
//!
//! Every value resolves with the same priority: command-line flag, then the
//! settings file, then the built-in default.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use bsneo_core::Region;

use crate::SettingsError;

/// Keys accepted by [`set_value`].
pub const KEYS: &[&str] = &[
    "export.region",
    "export.strict_region",
    "export.launch",
    "library.data_dir",
];

/// Contents of `settings.toml`. Missing tables and keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub export: ExportSettings,
    pub library: LibrarySettings,
}

/// The `[export]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Preferred media region code
    pub region: String,
    /// Drop assets with no media in a preferred region
    pub strict_region: bool,
    /// Launch command for newly created collections
    pub launch: Option<String>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            region: Region::Unspecified.code().to_string(),
            strict_region: false,
            launch: None,
        }
    }
}

/// The `[library]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Root of the scraped metadata store
    pub data_dir: Option<PathBuf>,
}

/// Canonical path to the settings file: `~/.config/bsneo/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("bsneo").join("settings.toml")
}

impl Settings {
    /// Load the settings file, or defaults if there is none.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolve the media region: CLI override, then `export.region`.
///
/// Unknown codes are rejected from either source.
pub fn resolve_region(cli_override: Option<&str>, settings: &Settings) -> Result<Region, SettingsError> {
    let code = cli_override.unwrap_or(settings.export.region.as_str());
    code.parse()
        .map_err(|_| SettingsError::UnknownRegion(code.to_string()))
}

/// Resolve strict region mode: CLI override, then `export.strict_region`.
pub fn resolve_strict_region(cli_override: Option<bool>, settings: &Settings) -> bool {
    cli_override.unwrap_or(settings.export.strict_region)
}

/// Set one key in the settings file.
pub fn set_value(key: &str, value: &str) -> Result<(), SettingsError> {
    set_value_at(&settings_path(), key, value)
}

/// Set one key in the settings file at `path`.
///
/// Uses `toml::Value` for a surgical update so unrelated keys and tables
/// are preserved. An empty value removes an optional key.
pub fn set_value_at(path: &Path, key: &str, value: &str) -> Result<(), SettingsError> {
    let (table_name, field) = key
        .split_once('.')
        .filter(|_| KEYS.contains(&key))
        .ok_or_else(|| SettingsError::UnknownKey(key.to_string()))?;

    let new_value = match key {
        "export.region" => {
            let region = Region::from_code(value.trim())
                .ok_or_else(|| SettingsError::UnknownRegion(value.to_string()))?;
            Some(toml::Value::String(region.code().to_string()))
        }
        "export.strict_region" => Some(toml::Value::Boolean(parse_bool(key, value)?)),
        _ if value.is_empty() => None,
        _ => Some(toml::Value::String(value.to_string())),
    };

    let mut doc: toml::Value = match std::fs::read_to_string(path) {
        Ok(contents) => contents.parse().map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => toml::Value::Table(Default::default()),
        Err(e) => return Err(e.into()),
    };

    let root = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let table = root
        .entry(table_name)
        .or_insert_with(|| toml::Value::Table(Default::default()))
        .as_table_mut()
        .ok_or_else(|| io::Error::other(format!("[{table_name}] is not a table")))?;

    match new_value {
        Some(v) => {
            table.insert(field.to_string(), v);
        }
        None => {
            table.remove(field);
        }
    }

    // Write atomically
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;

    log::debug!("Set {} in {}", key, path.display());
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, SettingsError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(SettingsError::invalid_value(
            key,
            format!("expected true or false, got '{other}'"),
        )),
    }
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
