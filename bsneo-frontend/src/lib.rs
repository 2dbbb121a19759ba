pub mod error;
pub mod media;
pub mod pegasus;

pub use error::FrontendError;
pub use pegasus::PegasusFormat;

use std::collections::BTreeMap;
use std::path::Path;

use bsneo_core::{ExportProgress, MetadataSource, Region};

/// Launch command written into a newly created collection block.
pub const DEFAULT_LAUNCH: &str = "\"Insert Launch Command Here!\"";

/// Options for one export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Region whose media is preferred
    pub region: Region,
    /// Drop asset slots that have no media in a preferred region
    pub strict_region: bool,
    /// Output file name per asset slot, replacing the slot name
    pub renames: BTreeMap<String, String>,
    /// Launch command for a new collection block
    pub launch: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            region: Region::Unspecified,
            strict_region: false,
            renames: BTreeMap::new(),
            launch: None,
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn strict_region(mut self, strict: bool) -> Self {
        self.strict_region = strict;
        self
    }

    pub fn rename(mut self, slot: impl Into<String>, name: impl Into<String>) -> Self {
        self.renames.insert(slot.into(), name.into());
        self
    }

    pub fn launch(mut self, launch: impl Into<String>) -> Self {
        self.launch = Some(launch.into());
        self
    }

    /// Launch command for a new collection block.
    pub fn launch_command(&self) -> &str {
        self.launch.as_deref().unwrap_or(DEFAULT_LAUNCH)
    }
}

/// A game (or one of its assets) that could not be exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFailure {
    /// Id of the stored game
    pub id: String,
    /// Asset slot, when only one asset failed
    pub slot: Option<String>,
    pub reason: String,
}

impl std::fmt::Display for ExportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.slot {
            Some(slot) => write!(f, "{} ({}): {}", self.id, slot, self.reason),
            None => write!(f, "{}: {}", self.id, self.reason),
        }
    }
}

/// Result of a completed export.
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Normalized names of every game now in the catalog, in catalog order
    pub exported: Vec<String>,
    /// Item-level problems that did not stop the export
    pub failures: Vec<ExportFailure>,
}

/// Trait for catalog formats of gaming frontends.
pub trait CatalogFormat {
    fn name(&self) -> &'static str;

    /// Conventional file name of the catalog.
    fn file_name(&self) -> &'static str;

    /// Export every game of `source` into the catalog at `dest`, merging
    /// with the catalog already there. Media is copied next to the catalog.
    ///
    /// # Returns
    /// * `Ok(ExportSummary)` - The catalog was written; per-game problems
    ///   are listed in the summary
    /// * `Err(FrontendError)` - Nothing was written
    fn export_system(
        &self,
        source: &dyn MetadataSource,
        dest: &Path,
        progress: &dyn Fn(ExportProgress),
    ) -> Result<ExportSummary, FrontendError>;
}
