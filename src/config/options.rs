// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// How many extra fetch+extract cycles a page gets when it comes back empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
}

impl RetryPolicy {
    pub fn new(retries: u32) -> Self {
        Self { retries }
    }

    pub fn attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { retries: DEFAULT_RETRIES }
    }
}

/// Google's `valueInputOption`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueInput {
    UserEntered,
    Raw,
}

impl ValueInput {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInput::UserEntered => "USER_ENTERED",
            ValueInput::Raw => "RAW",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub retry: RetryPolicy,
    pub value_input: ValueInput,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            value_input: ValueInput::UserEntered,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserOptions {
    pub base_url: String,
    pub token: String,
    pub render_timeout: Duration,
}

impl BrowserOptions {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: s!(PROFILE_URL),
            token: token.into(),
            render_timeout: Duration::from_secs(RENDER_TIMEOUT_SECS),
        }
    }
}
