//! Line parser for the HiPS properties format.
//!
//! A properties block is a sequence of `key = value` lines. Blank lines and
//! lines starting with `#` are ignored. Lines that do not split into a
//! non-empty key and a non-empty value are skipped without error, so a
//! partially malformed upstream file still yields every valid entry.

use indexmap::IndexMap;
use tracing::debug;

/// Comment marker at the start of a line.
pub const COMMENT_PREFIX: char = '#';

/// Separator between key and value.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Split a single line into a trimmed `(key, value)` pair.
///
/// Returns `None` for blank lines, comments, lines without `=` and lines
/// where either side is empty after trimming. Only the first `=` separates;
/// any further `=` belong to the value.
pub fn split_property_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return None;
    }

    let (key, value) = line.split_once(KEY_VALUE_SEPARATOR)?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a properties block into an insertion-ordered map.
///
/// A key that appears twice keeps its first position and takes the later
/// value.
pub fn parse_properties(text: &str) -> IndexMap<String, String> {
    let mut data = IndexMap::new();
    let mut skipped = 0usize;

    for line in text.split('\n') {
        match split_property_line(line) {
            Some((key, value)) => {
                data.insert(key.to_string(), value.to_string());
            }
            None => {
                let trimmed = line.trim();
                if !trimmed.is_empty() && !trimmed.starts_with(COMMENT_PREFIX) {
                    skipped += 1;
                }
            }
        }
    }

    if skipped > 0 {
        debug!(
            entries = data.len(),
            skipped, "Skipped malformed lines in properties block"
        );
    }

    data
}
