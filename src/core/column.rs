// src/core/column.rs
//! Spreadsheet column letters ⇄ 1-based column numbers.
//!
//! Columns use bijective base-26: there is no zero digit, so `Z` is 26 and
//! `AA` is 27. Every digit is shifted by one on the way in and on the way out.

/// `"A"` → 1, `"Z"` → 26, `"AA"` → 27. Case-insensitive.
/// `None` for empty input, non-letters, or a value that overflows `u32`.
pub fn index_of(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut n: u32 = 0;
    for b in letters.bytes() {
        if !b.is_ascii_alphabetic() {
            return None;
        }
        let digit = (b.to_ascii_uppercase() - b'A') as u32 + 1;
        n = n.checked_mul(26)?.checked_add(digit)?;
    }
    Some(n)
}

/// 1 → `"A"`, 26 → `"Z"`, 27 → `"AA"`. Column 0 does not exist and yields `None`.
pub fn letters_of(mut n: u32) -> Option<String> {
    if n == 0 {
        return None;
    }
    let mut rev = Vec::with_capacity(4);
    while n > 0 {
        n -= 1;
        rev.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    rev.reverse();
    // only ASCII A..Z pushed above
    Some(rev.into_iter().map(char::from).collect())
}
