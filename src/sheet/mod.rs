// src/sheet/mod.rs

pub mod auth;
pub mod remap;
pub mod sink;
pub mod table;

pub use remap::remap;
pub use sink::{DryRun, GoogleSheets, SheetSink, UpdateSummary};
pub use table::{RangeEntry, RangeTable};
