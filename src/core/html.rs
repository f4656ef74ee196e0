// src/core/html.rs
// Narrow scanners over raw page markup. No DOM; each helper looks for literal
// fragments and hands back byte spans into the input.

/// Find the value that follows the next `marker` at or after `from`.
///
/// The value starts `skip` characters past the end of the marker and runs up
/// to (not including) the next `delim`. Returns `(value_start, value_end)`.
/// `None` when there is no further marker, or the marker is not followed by
/// a delimiter.
pub fn next_marked_value(
    s: &str,
    marker: &str,
    skip: usize,
    delim: char,
    from: usize,
) -> Option<(usize, usize)> {
    if marker.is_empty() {
        return None;
    }
    let hit = s.get(from..)?.find(marker)? + from;
    let after_marker = hit + marker.len();
    let start = match skip {
        0 => after_marker,
        n => {
            let rest = s.get(after_marker..)?;
            // advance n chars; landing exactly on the end is fine
            match rest.char_indices().nth(n) {
                Some((i, _)) => after_marker + i,
                None if rest.chars().count() == n => s.len(),
                None => return None,
            }
        }
    };
    let end = s[start..].find(delim)? + start;
    Some((start, end))
}

/// Iterator over every marked value in document order.
pub struct MarkedValues<'a> {
    s: &'a str,
    marker: &'a str,
    skip: usize,
    delim: char,
    pos: usize,
    done: bool,
}

impl<'a> MarkedValues<'a> {
    pub fn new(s: &'a str, marker: &'a str, skip: usize, delim: char) -> Self {
        Self { s, marker, skip, delim, pos: 0, done: false }
    }
}

impl<'a> Iterator for MarkedValues<'a> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match next_marked_value(self.s, self.marker, self.skip, self.delim, self.pos) {
            Some((start, end)) => {
                // resume at the value start: a marker may sit before the delimiter
                self.pos = start;
                Some((start, end))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}
