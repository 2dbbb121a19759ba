//! Pegasus frontend catalog (`metadata.pegasus.txt`).

pub mod block;
pub mod codec;
pub mod merge;

use std::fs;
use std::path::Path;

use bsneo_core::{ExportProgress, MetadataSource, Platform};

use crate::media::{AssetSelector, copy_media};
use crate::{CatalogFormat, ExportFailure, ExportOptions, ExportSummary, FrontendError};
use block::build_block;
use codec::{read_catalog, write_catalog};
use merge::{CatalogMerger, Collection};

pub use codec::{FieldBlock, FieldValue};

/// Directory next to the catalog that holds exported media.
pub const MEDIA_DIR: &str = "media";

/// Pegasus frontend catalog format.
pub struct PegasusFormat {
    options: ExportOptions,
}

impl PegasusFormat {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    fn collection(&self, platform_id: &str) -> Collection {
        let name = Platform::from_id(platform_id)
            .map(|p| p.display_name().to_string())
            .unwrap_or_else(|| platform_id.to_string());
        Collection {
            name,
            shortname: platform_id.to_string(),
            launch: self.options.launch_command().to_string(),
        }
    }
}

impl Default for PegasusFormat {
    fn default() -> Self {
        Self::new(ExportOptions::default())
    }
}

impl CatalogFormat for PegasusFormat {
    fn name(&self) -> &'static str {
        "Pegasus"
    }

    fn file_name(&self) -> &'static str {
        "metadata.pegasus.txt"
    }

    fn export_system(
        &self,
        source: &dyn MetadataSource,
        dest: &Path,
        progress: &dyn Fn(ExportProgress),
    ) -> Result<ExportSummary, FrontendError> {
        if dest.is_dir() {
            return Err(FrontendError::DestinationIsDirectory(dest.to_path_buf()));
        }

        progress(ExportProgress::ReadingCatalog);
        let existing = read_catalog(dest)?;
        let mut merger = CatalogMerger::new(existing, &self.collection(source.platform_id()))?;
        progress(ExportProgress::CatalogLoaded {
            existing: merger.has_existing(),
        });

        let ids = source.game_ids()?;
        let catalog_dir = dest.parent().unwrap_or(Path::new(""));
        let media_root = catalog_dir.join(MEDIA_DIR);
        let selector = AssetSelector::new(self.options.region.code(), self.options.strict_region);
        let mut failures = Vec::new();

        for (index, id) in ids.iter().enumerate() {
            progress(ExportProgress::GameStarted {
                index,
                total: ids.len(),
                id: id.clone(),
            });

            let entry = match source.load(id) {
                Ok(entry) if entry.name.trim().is_empty() => {
                    fail_game(&mut failures, progress, id, "entry has no name".to_string());
                    continue;
                }
                Ok(entry) => entry,
                Err(e) => {
                    fail_game(&mut failures, progress, id, e.to_string());
                    continue;
                }
            };

            let candidates = entry.media_candidates();
            let selection = selector.select(&candidates);
            for slot in selection.skipped {
                progress(ExportProgress::AssetSkipped {
                    id: id.clone(),
                    slot,
                });
            }

            let copied = copy_media(
                &selection.chosen,
                &media_root.join(entry.media_folder()),
                &self.options.renames,
            );
            for (slot, e) in &copied.failed {
                progress(ExportProgress::AssetCopyFailed {
                    id: id.clone(),
                    slot: slot.clone(),
                    reason: e.to_string(),
                });
                failures.push(ExportFailure {
                    id: id.clone(),
                    slot: Some(slot.clone()),
                    reason: e.to_string(),
                });
            }

            let block = build_block(&entry, &copied, catalog_dir);
            if let Some(outcome) = merger.merge(block) {
                progress(ExportProgress::GameMerged {
                    id: outcome.key,
                    created: outcome.created,
                });
            }
        }

        if !catalog_dir.as_os_str().is_empty() {
            fs::create_dir_all(catalog_dir)?;
        }
        progress(ExportProgress::Writing {
            path: dest.to_path_buf(),
        });
        write_catalog(dest, merger.blocks())?;

        let exported = merger.game_ids();
        progress(ExportProgress::Done {
            exported: exported.len(),
        });
        Ok(ExportSummary { exported, failures })
    }
}

fn fail_game(
    failures: &mut Vec<ExportFailure>,
    progress: &dyn Fn(ExportProgress),
    id: &str,
    reason: String,
) {
    log::warn!("Skipping {}: {}", id, reason);
    progress(ExportProgress::GameFailed {
        id: id.to_string(),
        reason: reason.clone(),
    });
    failures.push(ExportFailure {
        id: id.to_string(),
        slot: None,
        reason,
    });
}
