/// Progress information for export callbacks.
///
/// Export routines never print; they report what they are doing through
/// these events and leave presentation to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportProgress {
    /// Looking for an existing catalog at the destination
    ReadingCatalog,
    /// Existing catalog handled; `existing` is false on a first export
    CatalogLoaded { existing: bool },
    /// Starting work on one stored game
    GameStarted {
        index: usize,
        total: usize,
        id: String,
    },
    /// No candidate for this asset slot passed region selection
    AssetSkipped { id: String, slot: String },
    /// Copying the selected media file failed; the slot is left out
    AssetCopyFailed {
        id: String,
        slot: String,
        reason: String,
    },
    /// The game could not be exported and was skipped
    GameFailed { id: String, reason: String },
    /// The game's block was merged into the catalog
    GameMerged { id: String, created: bool },
    /// Writing the catalog file
    Writing { path: std::path::PathBuf },
    /// Finished; `exported` games are now in the catalog
    Done { exported: usize },
}
