//! Parser for `p4 info` reports.
//!
//! Each non-empty line has the shape `Label: value`.

use crate::parse::fields::{field_key, split_field};
use crate::parse::record::Record;

/// Parses an info report into a [`Record`].
///
/// Blank lines and lines whose label normalises to nothing are skipped.
/// When a label repeats, the last value wins.
pub fn parse_info(text: &str) -> Record {
    let mut record = Record::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let (label, value) = split_field(line);
        let key = field_key(label);
        if key.is_empty() {
            log::debug!("Skipping info line without a label: {:?}", line);
            continue;
        }
        record.set(key, value.to_string());
    }

    record
}
