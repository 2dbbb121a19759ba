//! Conversion of scraped entries into catalog blocks.

use std::collections::BTreeMap;
use std::path::Path;

use bsneo_core::ScrapeEntry;
use serde_json::Value;

use super::codec::{FieldBlock, FieldValue, is_field_name, is_list_field};
use crate::media::CopiedMedia;

/// Fields written first, in this order. Everything else follows sorted by
/// name, then the asset fields.
pub const FIELD_ORDER: &[&str] = &[
    "game",
    "file",
    "description",
    "release",
    "developers",
    "publishers",
    "genres",
    "players",
];

/// Asset slots that are never exposed in the catalog.
const HIDDEN_SLOTS: &[&str] = &["box3d"];

/// Build the catalog block of one game.
///
/// `copied` holds the assets already placed next to the catalog; their
/// paths are written relative to `catalog_dir`. Empty values are left out
/// so that merging a sparse entry never blanks an existing field.
pub fn build_block(entry: &ScrapeEntry, copied: &CopiedMedia, catalog_dir: &Path) -> FieldBlock {
    let mut fields: BTreeMap<String, FieldValue> = BTreeMap::new();
    let mut put = |name: &str, value: Option<FieldValue>| {
        if let Some(value) = value {
            fields.entry(name.to_string()).or_insert(value);
        }
    };

    put("game", text_value(&entry.name));
    put("file", list_value(std::slice::from_ref(&entry.filename)));
    put("description", entry.desc.as_deref().and_then(text_value));
    put(
        "release",
        entry
            .release
            .as_deref()
            .map(normalize_release)
            .as_deref()
            .and_then(text_value),
    );
    put("developers", list_value(&entry.developers));
    put("publishers", list_value(&entry.publishers));
    put("genres", list_value(&entry.genres));
    put("rating", entry.rating.map(rating_value));
    put("scraped_with", entry.scraped_with.as_deref().and_then(text_value));
    for (name, value) in &entry.extra {
        if !is_field_name(name) {
            log::debug!("Skipping extra field {:?} of {}", name, entry.name);
            continue;
        }
        put(name.as_str(), json_value(name, value));
    }

    let mut block = FieldBlock::new();
    for name in FIELD_ORDER {
        if let Some(value) = fields.remove(*name) {
            block.set(*name, value);
        }
    }
    for (name, value) in fields {
        block.set(name, value);
    }

    for (slot, path) in &copied.copied {
        if HIDDEN_SLOTS.contains(&slot.as_str()) {
            continue;
        }
        block.set(
            format!("assets.{slot}"),
            FieldValue::Text(asset_path(path, catalog_dir)),
        );
    }

    log::debug!("Built block for {} with {} fields", entry.name, block.len());
    block
}

/// Canonical form of free text: line endings unified, each line trimmed,
/// wrapped lines joined with a space and blank runs collapsed into a
/// single paragraph break.
///
/// A paragraph that is only `.` is dropped, since the catalog format reads
/// a lone `.` line as a paragraph break.
pub fn canonical_text(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in normalized.split('\n').map(str::trim) {
        if line.is_empty() {
            push_paragraph(&mut paragraphs, &mut current);
        } else {
            current.push(line);
        }
    }
    push_paragraph(&mut paragraphs, &mut current);
    paragraphs.join("\n\n")
}

fn push_paragraph(paragraphs: &mut Vec<String>, current: &mut Vec<&str>) {
    if current.is_empty() {
        return;
    }
    let paragraph = current.join(" ");
    current.clear();
    if paragraph != "." {
        paragraphs.push(paragraph);
    }
}

/// Convert a long-form release date (`"February 21, 1986"`) to ISO
/// `YYYY-MM-DD`. Anything else is returned trimmed but unchanged.
pub fn normalize_release(release: &str) -> String {
    let release = release.trim();
    chrono::NaiveDate::parse_from_str(release, "%B %d, %Y")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| release.to_string())
}

fn text_value(text: &str) -> Option<FieldValue> {
    let text = canonical_text(text);
    (!text.is_empty()).then_some(FieldValue::Text(text))
}

/// List of non-empty trimmed items. An item spanning several lines becomes
/// one item per line.
fn list_value(items: &[String]) -> Option<FieldValue> {
    let items: Vec<String> = items
        .iter()
        .flat_map(|i| i.split(['\r', '\n']))
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(FieldValue::List(items))
}

fn rating_value(rating: f64) -> FieldValue {
    FieldValue::Text(format!("{:.0}%", rating.clamp(0.0, 1.0) * 100.0))
}

/// Value of an unrecognized JSON field, shaped by the field's kind.
fn json_value(name: &str, value: &Value) -> Option<FieldValue> {
    let items: Vec<String> = match value {
        Value::Null => return None,
        Value::Array(values) => values.iter().filter_map(json_item).collect(),
        other => json_item(other).into_iter().collect(),
    };

    if is_list_field(name) {
        list_value(&items)
    } else {
        text_value(&items.join(", "))
    }
}

fn json_item(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Path of a copied asset as written in the catalog: relative to the
/// catalog's directory, with `/` separators.
fn asset_path(path: &Path, catalog_dir: &Path) -> String {
    match pathdiff::diff_paths(path, catalog_dir) {
        Some(relative) => relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        None => path.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
#[path = "../tests/block_tests.rs"]
mod tests;
