//! Merging freshly built game blocks into an existing catalog.

use std::collections::HashMap;

use bsneo_core::normalize_name;

use super::codec::{FieldBlock, FieldValue};
use crate::FrontendError;

/// Legacy field name fragments and the canonical plural field they fold into.
pub const PLURAL_FIELDS: &[(&str, &str)] = &[
    ("extension", "extensions"),
    ("director", "directories"),
    ("developer", "developers"),
    ("publisher", "publishers"),
    ("genre", "genres"),
    ("tag", "tags"),
];

/// Catalog-level metadata used when a new collection block is needed.
#[derive(Debug, Clone)]
pub struct Collection {
    /// Display name, e.g. `"Super Nintendo Entertainment System"`
    pub name: String,
    /// Platform id, e.g. `"snes"`
    pub shortname: String,
    /// Launch command written into a new collection block
    pub launch: String,
}

impl Collection {
    fn to_block(&self) -> FieldBlock {
        [
            ("collection", FieldValue::Text(self.name.clone())),
            ("shortname", FieldValue::Text(self.shortname.clone())),
            ("launch", FieldValue::Text(self.launch.clone())),
        ]
        .into_iter()
        .collect()
    }
}

/// How a merged block landed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Normalized name of the game
    pub key: String,
    /// True when the game was not in the catalog before
    pub created: bool,
}

/// A catalog being updated with new game blocks.
///
/// Block 0 is always the collection block. Game blocks are matched by the
/// normalized value of their `game` field.
#[derive(Debug)]
pub struct CatalogMerger {
    blocks: Vec<FieldBlock>,
    index: HashMap<String, usize>,
    existing: bool,
}

impl CatalogMerger {
    /// Start from `existing` blocks, or from a fresh collection block when
    /// there are none.
    ///
    /// # Errors
    /// * `FrontendError::WrongSystem` - The existing collection block is for
    ///   another platform
    pub fn new(existing: Option<Vec<FieldBlock>>, collection: &Collection) -> Result<Self, FrontendError> {
        let blocks = match existing {
            Some(blocks) if !blocks.is_empty() => {
                let found = blocks[0].text("shortname").unwrap_or_default().trim();
                if found != collection.shortname {
                    return Err(FrontendError::wrong_system(&collection.shortname, found));
                }
                blocks
            }
            _ => {
                log::debug!("Creating collection block for {}", collection.shortname);
                return Ok(Self {
                    blocks: vec![collection.to_block()],
                    index: HashMap::new(),
                    existing: false,
                });
            }
        };

        let mut index = HashMap::new();
        for (i, block) in blocks.iter().enumerate().skip(1) {
            if let Some(game) = block.game() {
                index.entry(normalize_name(game)).or_insert(i);
            }
        }

        Ok(Self {
            blocks,
            index,
            existing: true,
        })
    }

    /// Whether this merge started from an existing catalog.
    pub fn has_existing(&self) -> bool {
        self.existing
    }

    /// Merge one game block.
    ///
    /// A known game is updated field by field: fields of `block` overwrite
    /// the stored ones in place and stored fields missing from `block` are
    /// kept. An unknown game is appended. Returns `None` for a block with
    /// no `game` field.
    pub fn merge(&mut self, block: FieldBlock) -> Option<MergeOutcome> {
        let key = normalize_name(block.game()?);

        let created = match self.index.get(&key) {
            Some(&i) => {
                let stored = &mut self.blocks[i];
                for (name, value) in block.iter() {
                    stored.set(name, value.clone());
                }
                migrate_non_plural(stored);
                false
            }
            None => {
                let mut block = block;
                migrate_non_plural(&mut block);
                self.index.insert(key.clone(), self.blocks.len());
                self.blocks.push(block);
                true
            }
        };

        log::debug!("{} {}", if created { "Added" } else { "Updated" }, key);
        Some(MergeOutcome { key, created })
    }

    /// Normalized names of every game in the catalog, in block order.
    pub fn game_ids(&self) -> Vec<String> {
        self.blocks
            .iter()
            .skip(1)
            .filter_map(|b| b.game())
            .map(normalize_name)
            .collect()
    }

    pub fn blocks(&self) -> &[FieldBlock] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<FieldBlock> {
        self.blocks
    }
}

/// Fold legacy singular list fields (`genre`, `developerList`,
/// `sub-genre`, ...) into their plural field.
///
/// A field is legacy when its name contains one of the fragments of
/// [`PLURAL_FIELDS`] and is not itself a canonical plural name.
///
/// Items missing from the plural field are appended in order and the
/// legacy field is removed. A missing plural field is created where the
/// first legacy field was. Returns the number of fields removed.
pub fn migrate_non_plural(block: &mut FieldBlock) -> usize {
    let mut removed = 0;

    for (prefix, plural) in PLURAL_FIELDS {
        let legacy: Vec<String> = block
            .names()
            .filter(|name| name.contains(prefix) && !is_plural(name))
            .map(str::to_string)
            .collect();
        let Some(first) = legacy.first() else {
            continue;
        };

        if !block.contains(plural) {
            let at = block.position(first).unwrap_or(block.len());
            block.insert(at, *plural, FieldValue::List(Vec::new()));
        }

        let mut items = block.get(plural).map(FieldValue::items).unwrap_or_default();
        for name in &legacy {
            if let Some(value) = block.remove(name) {
                for item in value.items() {
                    if !items.contains(&item) {
                        items.push(item);
                    }
                }
                removed += 1;
            }
        }
        block.set(*plural, FieldValue::List(items));
    }

    removed
}

fn is_plural(name: &str) -> bool {
    PLURAL_FIELDS.iter().any(|(_, plural)| *plural == name)
}

#[cfg(test)]
#[path = "../tests/merge_tests.rs"]
mod tests;
