use crate::entry::ScrapeEntry;
use crate::error::SourceError;

/// A store of scraped metadata for one platform.
///
/// Export pipelines read games through this trait, so they work the same
/// whether the documents live on disk or were built in memory.
pub trait MetadataSource {
    /// Platform id this store holds metadata for (e.g. `"snes"`).
    fn platform_id(&self) -> &str;

    /// Ids of every stored game, in a stable order.
    fn game_ids(&self) -> Result<Vec<String>, SourceError>;

    /// Load one stored game by id.
    ///
    /// # Returns
    /// * `Ok(ScrapeEntry)` - The parsed document
    /// * `Err(SourceError::NotFound)` - No document with this id
    /// * `Err(SourceError::Json)` - The document exists but does not parse
    fn load(&self, id: &str) -> Result<ScrapeEntry, SourceError>;
}

/// In-memory source, mostly useful for tests and for callers that already
/// hold parsed entries.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    platform_id: String,
    entries: Vec<(String, String)>,
}

impl MemorySource {
    pub fn new(platform_id: impl Into<String>) -> Self {
        Self {
            platform_id: platform_id.into(),
            entries: Vec::new(),
        }
    }

    /// Add a raw JSON document under `id`.
    pub fn with_json(mut self, id: impl Into<String>, json: impl Into<String>) -> Self {
        self.entries.push((id.into(), json.into()));
        self
    }

    /// Add a parsed entry, stored under its normalized name.
    pub fn with_entry(self, entry: &ScrapeEntry) -> Self {
        let json = serde_json::to_string(entry).unwrap_or_default();
        self.with_json(entry.key(), json)
    }
}

impl MetadataSource for MemorySource {
    fn platform_id(&self) -> &str {
        &self.platform_id
    }

    fn game_ids(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.entries.iter().map(|(id, _)| id.clone()).collect())
    }

    fn load(&self, id: &str) -> Result<ScrapeEntry, SourceError> {
        let (_, json) = self
            .entries
            .iter()
            .find(|(stored, _)| stored == id)
            .ok_or_else(|| SourceError::not_found(id))?;
        ScrapeEntry::from_json(json).map_err(|e| SourceError::json(id, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_loads_by_id() {
        let source = MemorySource::new("nes").with_json("TETRIS", r#"{"name": "Tetris"}"#);
        assert_eq!(source.platform_id(), "nes");
        assert_eq!(source.game_ids().unwrap(), vec!["TETRIS"]);
        assert_eq!(source.load("TETRIS").unwrap().name, "Tetris");
    }

    #[test]
    fn test_memory_source_errors() {
        let source = MemorySource::new("nes").with_json("BROKEN", "{not json");
        assert!(matches!(source.load("BROKEN"), Err(SourceError::Json { .. })));
        assert!(matches!(source.load("MISSING"), Err(SourceError::NotFound(_))));
    }
}
