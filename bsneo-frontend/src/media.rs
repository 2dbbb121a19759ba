use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use bsneo_core::{MediaCandidate, Region, preferred_regions};

/// Picks at most one media file per asset slot by region preference.
#[derive(Debug, Clone)]
pub struct AssetSelector {
    preferences: Vec<String>,
    strict: bool,
    match_any: bool,
}

/// Result of [`AssetSelector::select`].
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    /// One candidate per slot, in first-seen slot order
    pub chosen: Vec<&'a MediaCandidate>,
    /// Slots that had candidates but none was eligible
    pub skipped: Vec<String>,
}

impl AssetSelector {
    /// Selector for `base_region`.
    ///
    /// With `strict` set, a slot whose candidates are all outside the
    /// preference list is dropped. A base of `"none"` matches any region,
    /// so nothing is ever dropped for it.
    pub fn new(base_region: &str, strict: bool) -> Self {
        let preferences = preferred_regions(base_region);
        let match_any = base_region.trim().eq_ignore_ascii_case(Region::Unspecified.code());
        Self {
            preferences,
            strict,
            match_any,
        }
    }

    fn rank(&self, region: &str) -> Option<usize> {
        self.preferences.iter().position(|r| r == region)
    }

    /// Choose the best candidate of every slot.
    ///
    /// The most preferred region wins; between candidates of equal rank the
    /// first one wins. Without strict mode the first out-of-preference
    /// candidate is the fallback when no preferred one exists.
    pub fn select<'a>(&self, candidates: &'a [MediaCandidate]) -> Selection<'a> {
        let mut slots: Vec<&str> = Vec::new();
        for candidate in candidates {
            if !slots.contains(&candidate.slot.as_str()) {
                slots.push(&candidate.slot);
            }
        }

        let mut selection = Selection::default();
        for slot in slots {
            let mut best: Option<(usize, &MediaCandidate)> = None;
            let mut fallback: Option<&MediaCandidate> = None;

            for candidate in candidates.iter().filter(|c| c.slot == slot) {
                match self.rank(&candidate.region) {
                    Some(rank) if best.is_none_or(|(best_rank, _)| rank < best_rank) => {
                        best = Some((rank, candidate));
                    }
                    Some(_) => {}
                    None => {
                        fallback.get_or_insert(candidate);
                    }
                }
            }

            let picked = match best {
                Some((_, candidate)) => Some(candidate),
                None if !self.strict || self.match_any => fallback,
                None => None,
            };

            match picked {
                Some(candidate) => {
                    log::debug!(
                        "Selected {} ({}) for {}",
                        candidate.path.display(),
                        candidate.region,
                        slot
                    );
                    selection.chosen.push(candidate);
                }
                None => selection.skipped.push(slot.to_string()),
            }
        }
        selection
    }
}

/// Output file name of a selected asset: the slot name (or its rename
/// override) plus the source file's extension.
pub fn media_file_name(candidate: &MediaCandidate, renames: &BTreeMap<String, String>) -> String {
    let name = renames
        .get(&candidate.slot)
        .map(String::as_str)
        .unwrap_or(&candidate.slot);
    match candidate.path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{name}.{ext}"),
        None => name.to_string(),
    }
}

/// Outcome of copying the selected assets of one game.
#[derive(Debug, Default)]
pub struct CopiedMedia {
    /// Slot and destination path of each copied file
    pub copied: Vec<(String, PathBuf)>,
    /// Slot and error of each failed copy
    pub failed: Vec<(String, std::io::Error)>,
}

/// Copy selected assets into `game_dir`, creating it as needed.
///
/// Source files are never moved or modified. An existing destination file
/// is overwritten. A failed copy is recorded and the remaining slots are
/// still copied.
pub fn copy_media(
    chosen: &[&MediaCandidate],
    game_dir: &Path,
    renames: &BTreeMap<String, String>,
) -> CopiedMedia {
    let mut result = CopiedMedia::default();
    if chosen.is_empty() {
        return result;
    }

    if let Err(e) = fs::create_dir_all(game_dir) {
        for candidate in chosen {
            result.failed.push((
                candidate.slot.clone(),
                std::io::Error::new(e.kind(), e.to_string()),
            ));
        }
        return result;
    }

    for candidate in chosen {
        let dest = game_dir.join(media_file_name(candidate, renames));
        match fs::copy(&candidate.path, &dest) {
            Ok(_) => result.copied.push((candidate.slot.clone(), dest)),
            Err(e) => {
                log::warn!(
                    "Failed to copy {} to {}: {}",
                    candidate.path.display(),
                    dest.display(),
                    e
                );
                result.failed.push((candidate.slot.clone(), e));
            }
        }
    }
    result
}

#[cfg(test)]
#[path = "tests/media_tests.rs"]
mod tests;
