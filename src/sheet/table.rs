// src/sheet/table.rs
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::CellRange;
use crate::error::{Error, Result};
use crate::specs::commendations::page_path;

/// One tracked commendation page and where its values go.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEntry {
    pub name: String,
    /// As written, e.g. `"D4:D8"`. Anchored at A1 in the built-in table.
    pub range: String,
    /// Which progress values on the page to keep, in output order.
    pub indices: Vec<usize>,
    /// Page group the commendation lives under, e.g. `"HuntersCall"`.
    #[serde(alias = "source_group")]
    pub group: String,
}

impl RangeEntry {
    pub fn new(name: &str, range: &str, indices: &[usize], group: &str) -> Self {
        Self {
            name: s!(name),
            range: s!(range),
            indices: indices.to_vec(),
            group: s!(group),
        }
    }

    pub fn page_path(&self) -> String {
        page_path(&self.group, &self.name)
    }

    /// Parsed range, with the entry name attached to any failure.
    pub fn cell_range(&self) -> Result<CellRange> {
        self.range.parse().map_err(|e: Error| Error::MalformedRange {
            name: self.name.clone(),
            range: self.range.clone(),
            reason: e.to_string(),
        })
    }
}

// name, range (anchored at A1), indices, group
const BUILTIN: &[(&str, &str, &[usize], &str)] = &[
    ("splashtails", "D4:D8", &[0, 1, 2, 3, 4], "HuntersCall"),
    ("plentifins", "J4:J8", &[0, 1, 2, 3, 4], "HuntersCall"),
    ("ancientscales", "P4:P8", &[0, 1, 2, 3, 4], "HuntersCall"),
    ("wildsplashes", "D12:D16", &[0, 1, 2, 3, 4], "HuntersCall"),
    ("devilfishes", "J12:J16", &[0, 1, 2, 3, 4], "HuntersCall"),
    ("islehoppers", "P12:P16", &[0, 1, 2, 3, 4], "HuntersCall"),
    ("pondies", "D20:D24", &[0, 1, 2, 3, 4], "HuntersCall"),
    ("battlegills", "J20:J24", &[0, 1, 2, 3, 4], "HuntersCall"),
    ("stormfishes", "P20:P24", &[0, 1, 2, 3, 4], "HuntersCall"),
    ("wreckers", "V4:V8", &[0, 1, 2, 3, 4], "HuntersCall"),
    ("cooking", "AD5:BAD10", &[0, 1, 2, 3, 4, 5], "HuntersCall"),
    ("merrick's-accolades", "AD13:AD14", &[0, 7], "HuntersCall"),
    ("shrouded-spoils", "AD18:AD23", &[2, 3, 4, 5, 6, 7], "BilgeRats"),
];

/// Ordered name → entry table. Iteration order is insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeTable {
    entries: Vec<RangeEntry>,
}

impl RangeTable {
    /// Rejects duplicate names.
    pub fn from_entries(entries: Vec<RangeEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for e in &entries {
            if !seen.insert(e.name.as_str()) {
                return Err(Error::DuplicateEntry(e.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The tracker layout shipped with the tool.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(name, range, indices, group)| RangeEntry::new(name, range, indices, group))
            .collect();
        Self { entries }
    }

    /// JSON array of `{ "name", "range", "indices", "group" }`.
    pub fn from_json(text: &str) -> Result<Self> {
        let entries: Vec<RangeEntry> = serde_json::from_str(text)?;
        Self::from_entries(entries)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Keep only `names`, in table order. Unknown names are an error.
    pub fn retain_names(self, names: &[String]) -> Result<Self> {
        if let Some(missing) = names.iter().find(|n| self.get(n).is_none()) {
            return Err(Error::UnknownEntry(missing.clone()));
        }
        let entries = self
            .entries
            .into_iter()
            .filter(|e| names.contains(&e.name))
            .collect();
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&RangeEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RangeEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RangeTable {
    type Item = &'a RangeEntry;
    type IntoIter = std::slice::Iter<'a, RangeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
