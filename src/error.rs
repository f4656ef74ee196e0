// src/error.rs
use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid cell reference '{0}'")]
    InvalidCell(String),

    #[error("Malformed range '{range}' for entry '{name}': {reason}")]
    MalformedRange {
        name: String,
        range: String,
        reason: String,
    },

    #[error("Unknown name '{id}'. Set NAME in your environment to one of: {known} (or pass --anchor <CELL>)")]
    UnknownAnchor { id: String, known: String },

    #[error("Duplicate range table entry '{0}'")]
    DuplicateEntry(String),

    #[error("Unknown range table entry '{0}'")]
    UnknownEntry(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Spreadsheet update of {range} failed: {message}")]
    Sheets { range: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Interrupted")]
    Interrupted,

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Crypto(#[from] openssl::error::ErrorStack),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(e: chromiumoxide::error::CdpError) -> Self {
        Error::Browser(e.to_string())
    }
}
