// src/specs/mod.rs
//! Page-specific scraping specs.
//!
//! A spec knows where the values live in one kind of page and how to pull them
//! out of the raw markup. It does no I/O: fetching is `core::net`'s job and
//! writing is `sheet::sink`'s.
//!
//! - `commendations`: progress numerators from reputation/commendation pages.
pub mod commendations;
