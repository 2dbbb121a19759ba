use serde::{Deserialize, Serialize};

/// Market regions that a scraped media asset can be tagged with.
///
/// Variants are declared in catalog order; [`Region::all`] returns them in
/// that same order, which is also the order used to fill out the
/// preference list for [`Region::Unspecified`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// No region specified
    #[default]
    #[serde(rename = "none")]
    Unspecified,
    /// World / region-free
    World,
    /// North America
    Na,
    /// Europe
    Eu,
    /// Japan
    Jp,
    /// United States
    Us,
    /// Canada
    Ca,
    /// United Kingdom
    Uk,
    /// Australia
    Au,
    /// New Zealand
    Nz,
    /// Spain
    Es,
    /// France
    Fr,
    /// Italy
    It,
    /// Germany
    De,
    /// The Netherlands
    Nl,
    /// Russia
    Ru,
    /// Korea
    Kr,
    /// Hong Kong
    Hk,
    /// China
    Cn,
}

const ALL_REGIONS: &[Region] = &[
    Region::Unspecified,
    Region::World,
    Region::Na,
    Region::Eu,
    Region::Jp,
    Region::Us,
    Region::Ca,
    Region::Uk,
    Region::Au,
    Region::Nz,
    Region::Es,
    Region::Fr,
    Region::It,
    Region::De,
    Region::Nl,
    Region::Ru,
    Region::Kr,
    Region::Hk,
    Region::Cn,
];

/// Regions that broaden to North America.
const NA_GROUP: &[&str] = &["us", "ca"];

/// Regions that broaden to Europe.
const EU_GROUP: &[&str] = &["uk", "es", "fr", "it", "de", "nl", "ru"];

impl Region {
    /// Short code used in file names and settings (e.g. `"us"`, `"none"`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unspecified => "none",
            Self::World => "world",
            Self::Na => "na",
            Self::Eu => "eu",
            Self::Jp => "jp",
            Self::Us => "us",
            Self::Ca => "ca",
            Self::Uk => "uk",
            Self::Au => "au",
            Self::Nz => "nz",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::It => "it",
            Self::De => "de",
            Self::Nl => "nl",
            Self::Ru => "ru",
            Self::Kr => "kr",
            Self::Hk => "hk",
            Self::Cn => "cn",
        }
    }

    /// Human-readable name of this region.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unspecified => "No Region",
            Self::World => "World",
            Self::Na => "North America",
            Self::Eu => "Europe",
            Self::Jp => "Japan",
            Self::Us => "United States",
            Self::Ca => "Canada",
            Self::Uk => "United Kingdom",
            Self::Au => "Australia",
            Self::Nz => "New Zealand",
            Self::Es => "Spain",
            Self::Fr => "France",
            Self::It => "Italy",
            Self::De => "Germany",
            Self::Nl => "The Netherlands",
            Self::Ru => "Russia",
            Self::Kr => "Korea",
            Self::Hk => "Hong Kong",
            Self::Cn => "China",
        }
    }

    /// Look up a region by its short code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        let lower = code.to_ascii_lowercase();
        ALL_REGIONS.iter().copied().find(|r| r.code() == lower)
    }

    /// Every known region, in catalog order.
    pub fn all() -> &'static [Region] {
        ALL_REGIONS
    }

    /// Preference order for this region. See [`preferred_regions`].
    pub fn preferences(&self) -> Vec<String> {
        preferred_regions(self.code())
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when a string is not a known region code.
#[derive(Debug, Clone)]
pub struct RegionParseError(pub String);

impl std::fmt::Display for RegionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown region code: '{}'", self.0)
    }
}

impl std::error::Error for RegionParseError {}

impl std::str::FromStr for Region {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| RegionParseError(s.to_string()))
    }
}

/// Ordered list of region codes acceptable for `code`, most preferred first.
///
/// The list starts with `code` itself, followed by its broader market
/// (`"na"` or `"eu"`) when it has one, and always ends with `"world"` then
/// `"none"`. Unknown codes are accepted and get no broadening entry.
///
/// `"none"` means "no preference": the result is `["world", "none"]`
/// followed by every other known region, so nothing is filtered out.
pub fn preferred_regions(code: &str) -> Vec<String> {
    let code = code.trim().to_ascii_lowercase();

    if code == Region::Unspecified.code() {
        let mut prefs = vec![
            Region::World.code().to_string(),
            Region::Unspecified.code().to_string(),
        ];
        prefs.extend(
            ALL_REGIONS
                .iter()
                .filter(|r| !matches!(r, Region::Unspecified | Region::World))
                .map(|r| r.code().to_string()),
        );
        return prefs;
    }

    let mut prefs = vec![code.clone()];
    if NA_GROUP.contains(&code.as_str()) {
        prefs.push(Region::Na.code().to_string());
    } else if EU_GROUP.contains(&code.as_str()) {
        prefs.push(Region::Eu.code().to_string());
    }
    prefs.push(Region::World.code().to_string());
    prefs.push(Region::Unspecified.code().to_string());
    // "world" as the base code would otherwise appear twice
    prefs.dedup();
    prefs
}

/// Extract the region tag from a media file name.
///
/// The tag is the last `_`-separated segment of the part of the file name
/// before its first `.` (`boxFront_us.png` -> `"us"`). Files without an
/// underscore are untagged and report `"none"`.
pub fn region_from_file_name(file_name: &str) -> String {
    let base = file_name.split('.').next().unwrap_or(file_name);
    match base.rsplit_once('_') {
        Some((_, tag)) if !tag.is_empty() => tag.to_ascii_lowercase(),
        _ => Region::Unspecified.code().to_string(),
    }
}

#[cfg(test)]
#[path = "tests/region_tests.rs"]
mod tests;
