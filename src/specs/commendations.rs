// src/specs/commendations.rs
//! Commendation pages (`/profile/reputation/<Group>/<name>`).
//!
//! Each commendation on the page renders its progress as
//! `<div class="emblem-item__progress-text">12/50</div>`. The value we want is
//! the numerator: everything between the end of the marker and the first `/`.

use crate::config::consts::{PROGRESS_DELIM, PROGRESS_MARKER};
use crate::core::MarkedValues;

/// One sheet row per selected commendation.
pub type Rows = Vec<Vec<String>>;

/// Every progress token in document order.
///
/// The value is read `header_skip` characters past the end of `marker`.
/// A marker with no `/` after it ends the scan.
pub fn extract_all<'a>(text: &'a str, marker: &str, header_skip: usize) -> Vec<&'a str> {
    MarkedValues::new(text, marker, header_skip, PROGRESS_DELIM)
        .map(|(start, end)| &text[start..end])
        .collect()
}

/// Pick tokens by position and shape them as single-cell rows.
///
/// Out-of-range indices are dropped: a half-rendered page still contributes
/// whatever it has. `"0"` is written as an empty cell.
pub fn select_and_filter<S: AsRef<str>>(tokens: &[S], indices: &[usize]) -> Rows {
    indices
        .iter()
        .filter_map(|&i| tokens.get(i))
        .map(|t| match t.as_ref() {
            "0" => vec![s!()],
            v => vec![s!(v)],
        })
        .collect()
}

/// Extract + select with the production marker.
pub fn extract_rows(doc: &str, indices: &[usize]) -> Rows {
    let tokens = extract_all(doc, PROGRESS_MARKER, 0);
    select_and_filter(&tokens, indices)
}

/// Site path for a commendation page.
pub fn page_path(group: &str, name: &str) -> String {
    join!(group, "/", name)
}
