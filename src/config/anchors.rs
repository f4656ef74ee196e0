// src/config/anchors.rs
use crate::core::Coordinate;
use crate::error::{Error, Result};

/// Where each user's copy of the tracker starts on the shared sheet.
const ANCHORS: &[(&str, &str)] = &[
    ("ethan", "B30"),
    ("e", "B30"),
    ("chase", "B2"),
    ("c", "B2"),
];

/// Resolve a short user identifier to its anchor cell. Case-insensitive.
pub fn resolve(id: &str) -> Result<Coordinate> {
    let key = id.trim().to_ascii_lowercase();
    match ANCHORS.iter().find(|(k, _)| *k == key) {
        Some((_, cell)) => cell.parse(),
        None => Err(Error::UnknownAnchor {
            id: s!(id),
            known: known_ids().join(", "),
        }),
    }
}

pub fn known_ids() -> Vec<&'static str> {
    ANCHORS.iter().map(|(k, _)| *k).collect()
}
