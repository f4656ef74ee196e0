// src/core/cell.rs
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use super::column;

/// A1-style cell position. Both parts are 1-based; only `new` and parsing
/// build one, so neither can be zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    column: u32,
    row: u32,
}

impl Coordinate {
    pub const A1: Coordinate = Coordinate { column: 1, row: 1 };

    pub fn new(column: u32, row: u32) -> Option<Self> {
        (column >= 1 && row >= 1).then_some(Self { column, row })
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    /// Offset of `self` from A1, i.e. how far a table anchored at A1 must move.
    pub fn offset_from_a1(&self) -> (u32, u32) {
        (self.column.saturating_sub(1), self.row.saturating_sub(1))
    }

    /// Shift by a (column, row) offset. `None` on overflow.
    pub fn shifted(&self, (dc, dr): (u32, u32)) -> Option<Self> {
        Some(Self {
            column: self.column.checked_add(dc)?,
            row: self.row.checked_add(dr)?,
        })
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    /// `"AD13"` → column 30, row 13. Letters first, then digits, nothing else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || Error::InvalidCell(s!(s));
        let t = s.trim();
        let split = t
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(bad)?;
        let (letters, digits) = t.split_at(split);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let column = column::index_of(letters).ok_or_else(bad)?;
        let row: u32 = digits.parse().map_err(|_| bad())?;
        Coordinate::new(column, row).ok_or_else(bad)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // column >= 1 is guaranteed by construction
        let letters = column::letters_of(self.column).ok_or(fmt::Error)?;
        write!(f, "{}{}", letters, self.row)
    }
}

/// `"D4:D8"`, or a lone cell `"AE14"`. Start ≤ end is not checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRange {
    pub start: Coordinate,
    pub end: Option<Coordinate>,
}

impl CellRange {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end: Some(end) }
    }

    pub fn single(cell: Coordinate) -> Self {
        Self { start: cell, end: None }
    }

    pub fn shifted(&self, offset: (u32, u32)) -> Option<Self> {
        let start = self.start.shifted(offset)?;
        let end = match self.end {
            Some(e) => Some(e.shifted(offset)?),
            None => None,
        };
        Some(Self { start, end })
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let start: Coordinate = parts.next().unwrap_or_default().parse()?;
        let end = match parts.next() {
            Some(e) => Some(e.parse::<Coordinate>()?),
            None => None,
        };
        if parts.next().is_some() {
            return Err(Error::InvalidCell(s!(s)));
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}:{}", self.start, end),
            None => write!(f, "{}", self.start),
        }
    }
}
