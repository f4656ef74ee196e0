// src/sheet/remap.rs
//! Move a table authored against A1 onto a user's anchor.
//!
//! The offset is always `anchor - A1`; remapping an already remapped table
//! shifts it again rather than re-anchoring it.

use crate::core::Coordinate;
use crate::error::{Error, Result};
use super::table::{RangeEntry, RangeTable};

/// Shift one entry. Name, indices and group are carried over untouched.
///
/// At A1 the entry comes back exactly as written. Any other anchor rewrites
/// the range in canonical upper-case form, so `"d4:d8"` at B2 gives `"E5:E9"`.
pub fn remap_entry(anchor: Coordinate, entry: &RangeEntry) -> Result<RangeEntry> {
    let range = entry.cell_range()?;
    let offset = anchor.offset_from_a1();
    if offset == (0, 0) {
        return Ok(entry.clone());
    }
    let shifted = range
        .shifted(offset)
        .ok_or_else(|| Error::MalformedRange {
            name: entry.name.clone(),
            range: entry.range.clone(),
            reason: format!("shifting to {} overflows the sheet", anchor),
        })?;
    Ok(RangeEntry {
        range: shifted.to_string(),
        ..entry.clone()
    })
}

/// Shift every entry of `table` so A1 lands on `anchor`. Order is preserved.
pub fn remap(anchor: Coordinate, table: &RangeTable) -> Result<RangeTable> {
    let entries = table
        .iter()
        .map(|e| remap_entry(anchor, e))
        .collect::<Result<Vec<_>>>()?;
    RangeTable::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    fn table(entries: &[(&str, &str)]) -> RangeTable {
        let v = entries
            .iter()
            .map(|(n, r)| RangeEntry::new(n, r, &[0, 1, 2, 3, 4], "X"))
            .collect();
        RangeTable::from_entries(v).unwrap()
    }

    #[test]
    fn identity_anchor() {
        let t = RangeTable::builtin();
        assert_eq!(remap(Coordinate::A1, &t).unwrap(), t);
    }

    #[test]
    fn a1_leaves_range_text_as_written() {
        let e = RangeEntry::new("p", "d4:d8", &[0, 1, 2, 3, 4], "X");
        assert_eq!(remap_entry(Coordinate::A1, &e).unwrap().range, "d4:d8");
        // any real shift canonicalises
        assert_eq!(remap_entry(cell("B2"), &e).unwrap().range, "E5:E9");
    }

    #[test]
    fn a1_still_rejects_malformed_range() {
        let e = RangeEntry::new("bad", "D4:", &[0], "X");
        assert!(matches!(
            remap_entry(Coordinate::A1, &e),
            Err(Error::MalformedRange { name, .. }) if name == "bad"
        ));
    }

    #[test]
    fn b2_shifts_by_one_each_way() {
        let e = RangeEntry::new("x", "E5:E9", &[0, 1, 2, 3, 4], "X");
        let r = remap_entry(cell("B2"), &e).unwrap();
        assert_eq!(r, RangeEntry::new("x", "F6:F10", &[0, 1, 2, 3, 4], "X"));
    }

    #[test]
    fn builtin_onto_b30() {
        let t = remap(cell("B30"), &RangeTable::builtin()).unwrap();
        assert_eq!(t.get("splashtails").unwrap().range, "E33:E37");
        assert_eq!(t.get("wreckers").unwrap().range, "W33:W37");
        assert_eq!(t.get("merrick's-accolades").unwrap().range, "AE42:AE43");
        assert_eq!(t.get("cooking").unwrap().range, "AE34:BAE39");
        assert_eq!(t.get("shrouded-spoils").unwrap().indices, vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn column_carry_across_z() {
        let t = table(&[("z", "Y1:Z2")]);
        let r = remap(cell("C1"), &t).unwrap();
        assert_eq!(r.get("z").unwrap().range, "AA1:AB2");
    }

    #[test]
    fn single_cell_stays_single() {
        let t = table(&[("m", "AE14")]);
        assert_eq!(remap(cell("B2"), &t).unwrap().get("m").unwrap().range, "AF15");
    }

    #[test]
    fn order_preserved() {
        let t = table(&[("p", "A1:A2"), ("q", "B1:B2"), ("r", "C1:C2")]);
        let r = remap(cell("D4"), &t).unwrap();
        assert_eq!(r.names(), vec!["p", "q", "r"]);
        assert_eq!(r.len(), t.len());
    }

    #[test]
    fn offsets_measured_from_a1_each_time() {
        let t = table(&[("p", "E5:E9")]);
        let once = remap(cell("B2"), &t).unwrap();
        let twice = remap(cell("B2"), &once).unwrap();
        assert_eq!(twice.get("p").unwrap().range, "G7:G11");
        // same as a single remap by the summed offset
        assert_eq!(twice, remap(cell("C3"), &t).unwrap());
    }

    #[test]
    fn malformed_entry_is_named() {
        let t = table(&[("ok", "A1:A2"), ("bad", "A1:")]);
        match remap(cell("B2"), &t) {
            Err(Error::MalformedRange { name, range, .. }) => {
                assert_eq!(name, "bad");
                assert_eq!(range, "A1:");
            }
            other => panic!("expected MalformedRange, got {other:?}"),
        }
    }

    #[test]
    fn overflow_is_malformed() {
        let t = table(&[("big", "A4294967295")]);
        assert!(matches!(remap(cell("A2"), &t), Err(Error::MalformedRange { .. })));
    }
}
