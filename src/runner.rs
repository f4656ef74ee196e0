// src/runner.rs
use tracing::{info, warn};

use crate::{
    config::{RetryPolicy, RunOptions},
    core::{net::PageSource, sanitize::capitalize},
    error::Result,
    progress::Progress,
    sheet::{RangeEntry, RangeTable, SheetSink},
    specs::commendations::{self, Rows},
};

/// What happened to each page, in table order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub updated: Vec<(String, usize)>,
    pub skipped: Vec<String>,
}

/// Fetch → extract → write, one page at a time, in table order.
///
/// A page that yields no values after its retries is skipped and the run goes
/// on. Sink errors are not retried and end the run.
pub async fn run<S, K>(
    table: &RangeTable,
    source: &mut S,
    sink: &mut K,
    opts: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary>
where
    S: PageSource + ?Sized,
    K: SheetSink + ?Sized,
{
    if let Some(p) = progress.as_deref_mut() {
        p.begin(table.len());
    }

    let mut summary = RunSummary::default();

    for entry in table {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Updating {}", capitalize(&entry.name)));
        }

        let rows = collect_rows(source, entry, opts.retry, &mut progress).await;
        if rows.is_empty() {
            warn!("{}: no values found, skipping", entry.name);
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(&entry.name);
            }
            summary.skipped.push(entry.name.clone());
            continue;
        }

        let result = sink.update(&entry.range, opts.value_input, &rows).await?;
        info!("{}: {} cells written to {}", entry.name, result.updated_cells, entry.range);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&entry.name, result.updated_cells);
        }
        summary.updated.push((entry.name.clone(), result.updated_cells));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

/// Up to `retry.attempts()` fetch+extract cycles; stops at the first non-empty result.
async fn collect_rows<S>(
    source: &mut S,
    entry: &RangeEntry,
    retry: RetryPolicy,
    progress: &mut Option<&mut dyn Progress>,
) -> Rows
where
    S: PageSource + ?Sized,
{
    let attempts = retry.attempts();
    let mut attempt = 1;
    loop {
        let rows = fetch_rows(source, entry).await;
        if !rows.is_empty() || attempt >= attempts {
            return rows;
        }
        attempt += 1;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Retrying {} ({}/{}).", entry.name, attempt, attempts));
        }
    }
}

/// A failed fetch counts the same as a page with no values.
async fn fetch_rows<S>(source: &mut S, entry: &RangeEntry) -> Rows
where
    S: PageSource + ?Sized,
{
    match source.fetch(&entry.page_path()).await {
        Ok(doc) => commendations::extract_rows(&doc, &entry.indices),
        Err(e) => {
            warn!("error opening page {}: {}", entry.page_path(), e);
            Vec::new()
        }
    }
}
