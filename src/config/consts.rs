// src/config/consts.rs

// Site
pub const PROFILE_URL: &str = "https://www.seaofthieves.com/profile/reputation/";
pub const SESSION_COOKIE: &str = "rat";
pub const PROGRESS_CLASS: &str = "emblem-item__progress-text";
pub const PROGRESS_MARKER: &str = r#"<div class="emblem-item__progress-text">"#;
pub const PROGRESS_DELIM: char = '/';

// Browser
pub const RENDER_TIMEOUT_SECS: u64 = 10;
pub const RENDER_POLL_MS: u64 = 250;

// Google Sheets
pub const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const DEFAULT_CREDENTIALS: &str = "google_auth.json";
pub const TOKEN_LIFETIME_SECS: u64 = 3600;
pub const TOKEN_REFRESH_MARGIN_SECS: u64 = 60;

// Retry
pub const DEFAULT_RETRIES: u32 = 1;
