//! Reader and writer for the Pegasus `metadata.pegasus.txt` format.
//!
//! A catalog is a sequence of blocks separated by blank lines. Each block
//! holds `name: value` fields; indented lines continue the previous field,
//! a lone `.` continuation is a paragraph break, and lines starting with
//! `#` are comments.

use std::fs;
use std::path::Path;

use crate::FrontendError;

/// Field name fragments that make a field list-kind.
pub const LIST_FIELD_FRAGMENTS: &[&str] = &[
    "extension",
    "file",
    "director",
    "developer",
    "publisher",
    "genre",
    "tag",
];

const PARAGRAPH_BREAK: &str = "\n\n";
const INDENT: &str = "  ";

/// Whether values of `field` are lists of items rather than text.
pub fn is_list_field(field: &str) -> bool {
    LIST_FIELD_FRAGMENTS.iter().any(|f| field.contains(f))
}

/// Whether `name` can be written as a field name and read back unchanged.
///
/// A field name is non-empty, has no surrounding whitespace, does not start
/// with `#` and holds no `:` or line break.
pub fn is_field_name(name: &str) -> bool {
    !name.is_empty()
        && name.trim() == name
        && !name.starts_with('#')
        && !name.contains([':', '\r', '\n'])
}

/// The value of one catalog field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Scalar text. Paragraphs are separated by `"\n\n"`.
    Text(String),
    /// One entry per item line.
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// Items of this value, treating a scalar as a single item.
    pub fn items(&self) -> Vec<String> {
        match self {
            Self::Text(text) if text.is_empty() => Vec::new(),
            Self::Text(text) => vec![text.clone()],
            Self::List(items) => items.clone(),
        }
    }
}

/// One catalog record: an ordered set of named fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBlock {
    fields: Vec<(String, FieldValue)>,
}

impl FieldBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(n, _)| n == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldValue> {
        self.fields
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Scalar value of `name`, if the field exists and is text.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Set `name` to `value`, replacing an existing field in place or
    /// appending a new one at the end.
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.get_mut(&name) {
            Some(existing) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Insert a new field at `index`. Does not check for an existing field
    /// of the same name.
    pub fn insert(&mut self, index: usize, name: impl Into<String>, value: FieldValue) {
        let index = index.min(self.fields.len());
        self.fields.insert(index, (name.into(), value));
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        let index = self.position(name)?;
        Some(self.fields.remove(index).1)
    }

    /// The `game` title of this block, if it is a game block.
    pub fn game(&self) -> Option<&str> {
        self.text("game")
    }
}

impl<N: Into<String>> FromIterator<(N, FieldValue)> for FieldBlock {
    fn from_iter<I: IntoIterator<Item = (N, FieldValue)>>(iter: I) -> Self {
        let mut block = Self::new();
        for (name, value) in iter {
            block.set(name, value);
        }
        block
    }
}

/// Parse catalog text into blocks.
///
/// Runs of blank lines separate blocks; comment lines are skipped without
/// ending a block or a field. A field defined twice in one block keeps
/// accumulating into the first definition.
pub fn parse_catalog(text: &str) -> Result<Vec<FieldBlock>, FrontendError> {
    let mut blocks = Vec::new();
    let mut block = FieldBlock::new();
    let mut current: Option<usize> = None;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;

        if line.starts_with('#') {
            continue;
        }

        if line.trim().is_empty() {
            if !block.is_empty() {
                blocks.push(std::mem::take(&mut block));
            }
            current = None;
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            let field = current.ok_or_else(|| {
                FrontendError::malformed(line_no, "continuation line outside of a field")
            })?;
            let content = line.trim();
            match &mut block.fields[field].1 {
                FieldValue::List(items) => items.push(content.to_string()),
                FieldValue::Text(value) if content == "." => {
                    if !value.ends_with(PARAGRAPH_BREAK) {
                        value.push_str(PARAGRAPH_BREAK);
                    }
                }
                FieldValue::Text(value) => value.push_str(content),
            }
            continue;
        }

        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| FrontendError::malformed(line_no, "expected `name: value`"))?;
        let name = name.trim();
        let value = value.trim();

        current = Some(match block.position(name) {
            Some(existing) => {
                match &mut block.fields[existing].1 {
                    FieldValue::List(items) if !value.is_empty() => items.push(value.to_string()),
                    FieldValue::List(_) => {}
                    FieldValue::Text(text) => text.push_str(value),
                }
                existing
            }
            None => {
                let parsed = if is_list_field(name) {
                    FieldValue::List(if value.is_empty() {
                        Vec::new()
                    } else {
                        vec![value.to_string()]
                    })
                } else {
                    FieldValue::Text(value.to_string())
                };
                block.fields.push((name.to_string(), parsed));
                block.fields.len() - 1
            }
        });
    }

    if !block.is_empty() {
        blocks.push(block);
    }

    log::debug!("Parsed {} catalog blocks", blocks.len());
    Ok(blocks)
}

/// Read and parse the catalog at `path`.
///
/// Returns `Ok(None)` when there is no file yet, which is different from a
/// file that exists but holds no blocks.
pub fn read_catalog(path: &Path) -> Result<Option<Vec<FieldBlock>>, FrontendError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    parse_catalog(&text).map(Some)
}

/// Render blocks as catalog text.
///
/// The first block is the collection block and is always written first.
/// The remaining blocks are sorted by their `game` value; blocks without a
/// title sort before every titled game.
pub fn serialize_catalog(blocks: &[FieldBlock]) -> String {
    let mut out = String::new();
    let Some((collection, games)) = blocks.split_first() else {
        return out;
    };

    let mut games: Vec<&FieldBlock> = games.iter().collect();
    games.sort_by(|a, b| a.game().cmp(&b.game()));

    for (index, block) in std::iter::once(collection).chain(games).enumerate() {
        if index > 0 {
            out.push('\n');
        }
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &FieldBlock) {
    for (name, value) in block.iter() {
        if !is_field_name(name) {
            log::warn!("Not writing field with invalid name {:?}", name);
            continue;
        }
        match value {
            FieldValue::List(items) => {
                out.push_str(name);
                out.push_str(":\n");
                let lines = items
                    .iter()
                    .flat_map(|i| i.split(['\r', '\n']))
                    .map(str::trim)
                    .filter(|i| !i.is_empty());
                for item in lines {
                    out.push_str(INDENT);
                    out.push_str(item);
                    out.push('\n');
                }
            }
            FieldValue::Text(text) => {
                let mut lines = text.split('\n');
                let first = lines.next().unwrap_or_default().trim_end_matches('\r');
                out.push_str(name);
                out.push(':');
                if !first.is_empty() {
                    out.push(' ');
                    out.push_str(first);
                }
                out.push('\n');
                for line in lines {
                    let line = line.trim_end_matches('\r');
                    out.push_str(INDENT);
                    out.push_str(if line.trim().is_empty() { "." } else { line });
                    out.push('\n');
                }
            }
        }
    }
}

/// Write blocks to `path`, replacing any existing file.
pub fn write_catalog(path: &Path, blocks: &[FieldBlock]) -> Result<(), FrontendError> {
    fs::write(path, serialize_catalog(blocks))?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/codec_tests.rs"]
mod tests;
