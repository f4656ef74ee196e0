// src/core/mod.rs

pub mod cell;
pub mod column;
pub mod html;
pub mod net;
pub mod sanitize;

pub use cell::{CellRange, Coordinate};
pub use html::MarkedValues;
