//! Parsed report records.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered `field -> value` pairs recovered from a p4 report.
///
/// Fields keep the order in which they first appeared. Setting a field that
/// already exists overwrites its value in place, so the last occurrence of
/// a duplicated label wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: String, value: String) {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One entry of a changelist's `Files:` field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FileAction {
    pub file: String,
    /// Pending action (`edit`, `add`, `delete`, ...); `None` when the line
    /// carried no action marker.
    pub action: Option<String>,
}

/// A parsed `p4 change -o` report.
///
/// `files` is always present, empty when the report has no `Files:` field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeRecord {
    pub fields: Record,
    pub files: Vec<FileAction>,
}

impl ChangeRecord {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key)
    }

    /// The `Change:` field (`new` for an unsaved spec, else the number).
    pub fn change(&self) -> Option<&str> {
        self.get("change")
    }

    pub fn status(&self) -> Option<&str> {
        self.get("status")
    }

    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }
}

impl Serialize for ChangeRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        for (key, value) in self.fields.iter() {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("files", &self.files)?;
        map.end()
    }
}
