// src/core/sanitize.rs

/// First character upper-cased, the rest lower-cased.
/// `"merrick's-accolades"` → `"Merrick's-accolades"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => s!(),
    }
}
