pub mod entry;
pub mod error;
pub mod platform;
pub mod progress;
pub mod region;
pub mod source;
pub mod util;

pub use entry::{ImageRef, MediaCandidate, ScrapeEntry, VIDEO_SLOT};
pub use error::SourceError;
pub use platform::{Platform, PlatformParseError};
pub use progress::ExportProgress;
pub use region::{Region, RegionParseError, preferred_regions};
pub use source::{MemorySource, MetadataSource};
pub use util::normalize_name;
