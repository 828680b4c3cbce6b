//! Option schema: static metadata describing how each abstract option name
//! maps onto a p4 command line.
//!
//! The built-in table lives in `schema.json` next to this file and is parsed
//! once, on first use. Callers that drive a differently configured server
//! can load their own table with [`OptionSchema::from_path`].

use crate::error::{CoreError, CoreResult};
use crate::options::value::OptionValue;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const BUILTIN_SCHEMA: &str = include_str!("schema.json");

static DEFAULT_SCHEMA: Lazy<OptionSchema> = Lazy::new(|| {
    // The embedded document is covered by tests; a failure here is a
    // packaging bug, not a runtime condition.
    OptionSchema::from_json(BUILTIN_SCHEMA).unwrap_or_else(|e| {
        log::error!("Built-in option schema is invalid: {}", e);
        OptionSchema::default()
    })
});

/// Where a translated option ends up in the command plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionCategory {
    /// A bare flag; emitted whenever the option is present.
    Unary,
    /// A flag followed by its argument as a separate token.
    Mixed,
    /// A `<flag><value>` line piped on standard input (forces `-i`).
    Stdin,
    /// File arguments appended after all flags.
    Positional,
}

/// The value shape an option expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Text,
    Number,
    Bool,
    List,
}

impl ValueType {
    /// Whether `value` has this runtime shape. A list type also accepts a
    /// single text value, which is then treated as a one-element list. A
    /// number type also accepts decimal digit text, which carries values
    /// too large for `i64`.
    pub fn accepts(self, value: &OptionValue) -> bool {
        if let (ValueType::Number, OptionValue::Text(text)) = (self, value) {
            return !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit());
        }
        matches!(
            (self, value),
            (ValueType::Text, OptionValue::Text(_))
                | (ValueType::Number, OptionValue::Number(_))
                | (ValueType::Bool, OptionValue::Bool(_))
                | (ValueType::List, OptionValue::List(_))
                | (ValueType::List, OptionValue::Text(_))
        )
    }
}

/// Metadata for one known option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub name: String,
    pub category: OptionCategory,
    pub expected_type: ValueType,
    /// Literal flag token, or the stdin field prefix for stdin options.
    /// Always `None` for positional options.
    pub flag: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaEntry {
    category: OptionCategory,
    #[serde(rename = "type")]
    value_type: ValueType,
    #[serde(default)]
    flag: Option<String>,
}

/// A lookup table of option descriptors keyed by option name.
#[derive(Debug, Clone, Default)]
pub struct OptionSchema {
    descriptors: BTreeMap<String, OptionDescriptor>,
}

impl OptionSchema {
    /// The schema shipped with the crate.
    pub fn builtin() -> &'static OptionSchema {
        &DEFAULT_SCHEMA
    }

    /// Parses a schema document.
    ///
    /// Every non-positional option must carry a flag token and positional
    /// options must not.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let entries: BTreeMap<String, SchemaEntry> =
            serde_json::from_str(json).map_err(|e| CoreError::Schema(e.to_string()))?;

        let mut descriptors = BTreeMap::new();
        for (name, entry) in entries {
            let flag = entry.flag.filter(|f| !f.is_empty());
            match (entry.category, &flag) {
                (OptionCategory::Positional, Some(flag)) => {
                    return Err(CoreError::Schema(format!(
                        "positional option '{}' must not declare a flag (found '{}')",
                        name, flag
                    )));
                }
                (OptionCategory::Positional, None) => {}
                (category, None) => {
                    return Err(CoreError::Schema(format!(
                        "{:?} option '{}' requires a flag",
                        category, name
                    )));
                }
                _ => {}
            }
            descriptors.insert(
                name.clone(),
                OptionDescriptor {
                    name,
                    category: entry.category,
                    expected_type: entry.value_type,
                    flag,
                },
            );
        }
        Ok(Self { descriptors })
    }

    /// Reads and parses a schema document from disk.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        log::debug!("Loading option schema from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn get(&self, name: &str) -> Option<&OptionDescriptor> {
        self.descriptors.get(name)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
