// src/config/mod.rs

pub mod anchors;
pub mod consts;
pub mod options;

pub use options::{BrowserOptions, RetryPolicy, RunOptions, ValueInput};
