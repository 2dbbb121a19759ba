pub mod error;
pub mod paths;
pub mod settings;
pub mod source;

pub use error::SettingsError;
pub use settings::Settings;
pub use source::MetadataDir;

// Re-export the domain types callers need alongside the services here.
pub use bsneo_core::{ExportProgress, MetadataSource, Platform, Region, ScrapeEntry, SourceError};
