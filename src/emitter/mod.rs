use crate::mapper::Record;
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use std::io::Write;


/// Format version written at the top of every shortcuts document
pub const VERSION: &str = "2025";

/// Raw value meaning no key is bound
pub const KEY_NONE: &str = "KEY_NONE";

/// Generic modifiers and the left-hand keys they become
const MODIFIER_REWRITES: &[(&str, &str)] = &[("KEY_CTL", "KEY_CTL_L"), ("KEY_ALT", "KEY_ALT_L")];

/// Value to write for a raw field value, or `None` when the field is dropped
pub fn shortcut_value(raw: &str) -> Option<&str> {
    if raw == KEY_NONE {
        return None;
    }

    let value = MODIFIER_REWRITES
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
        .unwrap_or(raw);

    Some(value)
}

/// Array key for a category, e.g. `viewerShortcuts`
pub fn shortcuts_key(category: &str) -> String {
    format!("{}Shortcuts", category)
}

struct Shortcut<'a>(&'a Record);

impl Serialize for Shortcut<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, raw) in self.0.iter() {
            if let Some(value) = shortcut_value(raw) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

struct Shortcuts<'a>(&'a [Record]);

impl Serialize for Shortcuts<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for record in self.0 {
            seq.serialize_element(&Shortcut(record))?;
        }
        seq.end()
    }
}

/// A shortcuts document: the version plus one category's records
pub struct Document<'a> {
    pub category: &'a str,
    pub records: &'a [Record],
}

impl Serialize for Document<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("Version", VERSION)?;
        map.serialize_entry(&shortcuts_key(self.category), &Shortcuts(self.records))?;
        map.end()
    }
}

/// Write records as a shortcuts document with four-space indentation
pub fn write_document<W: Write>(
    writer: W,
    category: &str,
    records: &[Record],
) -> serde_json::Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    Document { category, records }.serialize(&mut serializer)
}

pub fn render_document(category: &str, records: &[Record]) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    write_document(&mut buf, category, records)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}
