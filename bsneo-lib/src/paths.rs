//! Layout of the scraped metadata store.
//!
//! ```text
//! <root>/<platform>/metadata/<NAME>.json
//! <root>/<platform>/media/<NAME>/<slot>_<region>.<ext>
//! ```

use std::io;
use std::path::{Path, PathBuf};

use bsneo_core::Platform;

use crate::settings::Settings;

/// Default store root: `<data_dir>/bsneo`.
pub fn default_data_root() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("bsneo")
}

/// Resolve the store root using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `library.data_dir` in `settings.toml`
/// 3. [`default_data_root`]
pub fn resolve_data_root(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    cli_override
        .or_else(|| settings.library.data_dir.clone())
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(default_data_root)
}

pub fn system_dir(root: &Path, platform_id: &str) -> PathBuf {
    root.join(platform_id)
}

/// Directory holding one JSON document per game.
pub fn metadata_dir(root: &Path, platform_id: &str) -> PathBuf {
    system_dir(root, platform_id).join("metadata")
}

/// Directory holding downloaded media, one folder per game.
pub fn media_dir(root: &Path, platform_id: &str) -> PathBuf {
    system_dir(root, platform_id).join("media")
}

/// Platforms that have a metadata directory under `root`, sorted by
/// display name. A missing root means nothing is stored yet.
pub fn stored_systems(root: &Path) -> io::Result<Vec<Platform>> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut systems = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(platform) = name.to_str().and_then(Platform::from_id) else {
            continue;
        };
        if metadata_dir(root, platform.id()).is_dir() {
            systems.push(platform);
        }
    }
    systems.sort_by_key(|p| p.display_name());
    Ok(systems)
}
