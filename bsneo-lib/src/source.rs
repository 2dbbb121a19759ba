use std::io;
use std::path::{Path, PathBuf};

use bsneo_core::{MetadataSource, ScrapeEntry, SourceError};

use crate::paths;

/// Scraped metadata of one platform, stored as one JSON file per game.
#[derive(Debug, Clone)]
pub struct MetadataDir {
    platform_id: String,
    dir: PathBuf,
}

impl MetadataDir {
    /// The metadata directory of `platform_id` under store `root`.
    pub fn new(root: &Path, platform_id: &str) -> Self {
        Self::at(paths::metadata_dir(root, platform_id), platform_id)
    }

    /// A metadata directory at an explicit path.
    pub fn at(dir: impl Into<PathBuf>, platform_id: &str) -> Self {
        Self {
            platform_id: platform_id.to_string(),
            dir: dir.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn document_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

impl MetadataSource for MetadataDir {
    fn platform_id(&self) -> &str {
        &self.platform_id
    }

    /// File stems of every `.json` document, sorted.
    fn game_ids(&self) -> Result<Vec<String>, SourceError> {
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        log::debug!("{} stored games in {}", ids.len(), self.dir.display());
        Ok(ids)
    }

    fn load(&self, id: &str) -> Result<ScrapeEntry, SourceError> {
        let contents = match std::fs::read_to_string(self.document_path(id)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SourceError::not_found(id));
            }
            Err(e) => return Err(e.into()),
        };
        ScrapeEntry::from_json(&contents).map_err(|e| SourceError::json(id, e))
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
