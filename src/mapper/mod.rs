mod record;
mod variant;


pub use record::Record;
pub use variant::{Schema, Variant};

use crate::error::ConvertError;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Identifier, at least one whitespace character, then the rest of the line as the value.
static FIELD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\w+)\s+(.*)$").expect("field line pattern"));

/// How to treat block content that does not look like `Name value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Skip unparseable lines and unterminated blocks
    #[default]
    Lenient,
    /// Reject them
    Strict,
}

/// Parse one block, skipping lines that don't match
pub fn parse_block(block: &str, variant: Variant) -> Record {
    parse_block_with_mode(block, variant, ParseMode::Lenient).unwrap_or_default()
}

/// Parse one block into a [`Record`] ordered by `variant`.
///
/// Lines are matched as `Name value`. Names the variant doesn't know are
/// ignored in both modes. When a name appears more than once the last value
/// wins. In [`ParseMode::Strict`] a non-blank line that isn't `Name value`
/// fails with [`ConvertError::MalformedLine`], numbered from the start marker's line.
pub fn parse_block_with_mode(
    block: &str,
    variant: Variant,
    mode: ParseMode,
) -> Result<Record, ConvertError> {
    let mut values: HashMap<&'static str, &str> = HashMap::new();

    for (index, line) in block.lines().enumerate() {
        let Some(caps) = FIELD_LINE.captures(line) else {
            if mode == ParseMode::Strict && !line.trim().is_empty() {
                return Err(ConvertError::MalformedLine {
                    line: index + 1,
                    text: line.to_string(),
                });
            }
            continue;
        };

        let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };

        if let Some(canonical) = variant.canonical_name(key.as_str()) {
            values.insert(canonical, value.as_str());
        }
    }

    let fields = variant
        .field_order()
        .iter()
        .filter_map(|name| values.get(name).map(|value| (*name, value.to_string())))
        .collect();

    Ok(Record::from_fields(fields))
}
