// src/sheet/sink.rs
use std::io::Write;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::ValueInput;
use crate::config::consts::SHEETS_API;
use crate::error::{Error, Result};
use super::auth::ServiceAccount;

/// What a write reported back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub updated_cells: usize,
}

/// Somewhere to write a block of rows.
#[async_trait]
pub trait SheetSink {
    async fn update(
        &mut self,
        range: &str,
        mode: ValueInput,
        rows: &[Vec<String>],
    ) -> Result<UpdateSummary>;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateValuesResponse {
    #[serde(default)]
    updated_cells: Option<usize>,
}

/// `spreadsheets.values.update` against one spreadsheet.
pub struct GoogleSheets {
    sheet_id: String,
    auth: ServiceAccount,
    http: reqwest::Client,
    api: String,
}

impl GoogleSheets {
    pub fn new(sheet_id: impl Into<String>, auth: ServiceAccount, http: reqwest::Client) -> Self {
        Self { sheet_id: sheet_id.into(), auth, http, api: s!(SHEETS_API) }
    }

    /// `<api>/<sheet id>/values/<range>`, each segment percent-encoded.
    pub fn values_url(&self, range: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.api)
            .map_err(|e| Error::Config(format!("bad Sheets API url {}: {}", self.api, e)))?;
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("bad Sheets API url {}", self.api)))?
            .push(&self.sheet_id)
            .push("values")
            .push(range);
        Ok(url)
    }
}

#[async_trait]
impl SheetSink for GoogleSheets {
    async fn update(
        &mut self,
        range: &str,
        mode: ValueInput,
        rows: &[Vec<String>],
    ) -> Result<UpdateSummary> {
        let token = self.auth.token().await?;
        let url = self.values_url(range)?;
        debug!("PUT {url} ({} rows)", rows.len());

        let resp = self
            .http
            .put(url)
            .bearer_auth(token)
            .query(&[("valueInputOption", mode.as_str())])
            .json(&json!({ "range": range, "values": rows }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Sheets {
                range: s!(range),
                message: format!("{status}: {body}"),
            });
        }
        let body: UpdateValuesResponse = resp.json().await?;
        Ok(UpdateSummary { updated_cells: body.updated_cells.unwrap_or(0) })
    }
}

/// Prints what would be written instead of writing it.
pub struct DryRun<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> DryRun<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[async_trait]
impl<W: Write + Send> SheetSink for DryRun<W> {
    async fn update(
        &mut self,
        range: &str,
        mode: ValueInput,
        rows: &[Vec<String>],
    ) -> Result<UpdateSummary> {
        writeln!(self.out, "{range} ({})", mode.as_str())?;
        let mut cells = 0;
        for row in rows {
            cells += row.len();
            writeln!(self.out, "  {}", row.join("\t"))?;
        }
        Ok(UpdateSummary { updated_cells: cells })
    }
}
