use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::region::{Region, region_from_file_name};
use crate::util::normalize_name;

/// Metadata for one game, as written by the scrape stage.
///
/// One of these is stored per game under the platform's metadata
/// directory. The export pipeline only reads them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapeEntry {
    /// Display title
    pub name: String,
    /// Normalized title, used for storage folder names
    #[serde(default)]
    pub clean_name: String,
    /// ROM file name this entry was scraped for
    #[serde(default)]
    pub filename: String,
    /// Long description; paragraphs separated by blank lines
    #[serde(default)]
    pub desc: Option<String>,
    /// Release date, normally ISO `YYYY-MM-DD`
    #[serde(default)]
    pub release: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub developers: Vec<String>,
    #[serde(default)]
    pub publishers: Vec<String>,
    /// Rating from 0.0 to 1.0
    #[serde(default)]
    pub rating: Option<f64>,
    /// Downloaded images per asset slot
    #[serde(default, deserialize_with = "deserialize_imgs")]
    pub imgs: BTreeMap<String, Vec<ImageRef>>,
    /// Platform id the entry was scraped for
    #[serde(default)]
    pub platform: String,
    /// Short id of the scraping service
    #[serde(default)]
    pub scraped_with: Option<String>,
    /// Local video file, or a remote URL when the video was not downloaded
    #[serde(default)]
    pub video: Option<String>,
    /// Any other fields, kept verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ScrapeEntry {
    /// Parse an entry from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Identity key of this game (see [`normalize_name`]).
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }

    /// Folder name for this game's exported media.
    ///
    /// Uses the stored clean name when the scrape stage wrote one.
    pub fn media_folder(&self) -> String {
        if self.clean_name.trim().is_empty() {
            self.key()
        } else {
            self.clean_name.clone()
        }
    }

    /// All media candidates of this entry, grouped by slot in slot order.
    ///
    /// A `video` field naming an existing local file counts as a single
    /// candidate for the `video` slot.
    pub fn media_candidates(&self) -> Vec<MediaCandidate> {
        let mut candidates: Vec<MediaCandidate> = self
            .imgs
            .iter()
            .flat_map(|(slot, refs)| refs.iter().map(move |r| r.to_candidate(slot)))
            .collect();

        if let Some(video) = self.video.as_deref() {
            let path = Path::new(video);
            if path.is_file() {
                candidates.push(MediaCandidate::from_path(VIDEO_SLOT, path));
            }
        }

        candidates
    }
}

/// Asset slot used for a downloaded video.
pub const VIDEO_SLOT: &str = "video";

/// One downloaded image, as stored in `imgs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    /// A bare local path; the region is encoded in the file name.
    Path(String),
    /// A `[path, region]` pair.
    Tagged(String, String),
}

impl ImageRef {
    fn to_candidate(&self, slot: &str) -> MediaCandidate {
        match self {
            Self::Path(path) => MediaCandidate::from_path(slot, Path::new(path)),
            Self::Tagged(path, region) => {
                let region = region.trim();
                MediaCandidate {
                    slot: slot.to_string(),
                    region: if region.is_empty() {
                        Region::Unspecified.code().to_string()
                    } else {
                        region.to_ascii_lowercase()
                    },
                    path: PathBuf::from(path),
                }
            }
        }
    }
}

/// A media file that may be exported for one asset slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaCandidate {
    /// Asset slot name (e.g. `"boxFront"`, `"screenshot"`)
    pub slot: String,
    /// Region code of this variant
    pub region: String,
    /// Source file
    pub path: PathBuf,
}

impl MediaCandidate {
    /// Build a candidate whose region is read from the file name.
    pub fn from_path(slot: &str, path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            slot: slot.to_string(),
            region: region_from_file_name(&file_name),
            path: path.to_path_buf(),
        }
    }
}

/// `imgs` is a map normally, but the scrape stage writes `[]` when it could
/// not gather any images.
fn deserialize_imgs<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<ImageRef>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Imgs {
        Map(BTreeMap<String, Vec<ImageRef>>),
        List(Vec<serde::de::IgnoredAny>),
    }

    Ok(match Option::<Imgs>::deserialize(deserializer)? {
        Some(Imgs::Map(map)) => map,
        Some(Imgs::List(items)) => {
            if !items.is_empty() {
                log::debug!("Ignoring {} images without a slot", items.len());
            }
            BTreeMap::new()
        }
        None => BTreeMap::new(),
    })
}

#[cfg(test)]
#[path = "tests/entry_tests.rs"]
mod tests;
