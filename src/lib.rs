// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod progress;
pub mod runner;
pub mod sheet;
pub mod specs;

pub use error::{Error, Result};
