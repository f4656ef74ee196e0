// tests/runner_flow.rs
//
// The fetch → extract → write loop with in-memory collaborators.
//
use std::collections::HashMap;

use async_trait::async_trait;
use sot_scrape::config::{RetryPolicy, RunOptions, ValueInput};
use sot_scrape::config::consts::PROGRESS_MARKER;
use sot_scrape::core::net::PageSource;
use sot_scrape::progress::Progress;
use sot_scrape::runner::{self, RunSummary};
use sot_scrape::sheet::{remap, RangeEntry, RangeTable, SheetSink, UpdateSummary};
use sot_scrape::{Error, Result};

fn page(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("<li>{PROGRESS_MARKER}{v}/10</div></li>"))
        .collect()
}

/// Serves queued responses per path; an empty queue means "failed to render".
#[derive(Default)]
struct FakeSite {
    pages: HashMap<String, Vec<Result<String>>>,
    requests: Vec<String>,
}

impl FakeSite {
    fn serve(mut self, path: &str, responses: Vec<Result<String>>) -> Self {
        self.pages.insert(path.to_string(), responses);
        self
    }
}

#[async_trait]
impl PageSource for FakeSite {
    async fn fetch(&mut self, path: &str) -> Result<String> {
        self.requests.push(path.to_string());
        match self.pages.get_mut(path) {
            Some(queue) if !queue.is_empty() => queue.remove(0),
            _ => Err(Error::Browser(format!("timed out on {path}"))),
        }
    }
}

#[derive(Default)]
struct RecordingSheet {
    writes: Vec<(String, ValueInput, Vec<Vec<String>>)>,
    fail_on: Option<String>,
}

#[async_trait]
impl SheetSink for RecordingSheet {
    async fn update(
        &mut self,
        range: &str,
        mode: ValueInput,
        rows: &[Vec<String>],
    ) -> Result<UpdateSummary> {
        if self.fail_on.as_deref() == Some(range) {
            return Err(Error::Sheets { range: range.to_string(), message: "403".to_string() });
        }
        self.writes.push((range.to_string(), mode, rows.to_vec()));
        Ok(UpdateSummary { updated_cells: rows.len() })
    }
}

#[derive(Default)]
struct Log(Vec<String>);

impl Progress for Log {
    fn log(&mut self, msg: &str) {
        self.0.push(msg.to_string());
    }
    fn item_done(&mut self, name: &str, cells: usize) {
        self.0.push(format!("done {name} {cells}"));
    }
    fn item_failed(&mut self, name: &str) {
        self.0.push(format!("failed {name}"));
    }
}

fn table() -> RangeTable {
    RangeTable::from_entries(vec![
        RangeEntry::new("pondies", "D20:D24", &[0, 1, 2, 3, 4], "HuntersCall"),
        RangeEntry::new("merrick's-accolades", "AD13:AD14", &[0, 7], "HuntersCall"),
        RangeEntry::new("shrouded-spoils", "AD18:AD23", &[2, 3, 4, 5, 6, 7], "BilgeRats"),
    ])
    .unwrap()
}

fn rows(vals: &[&str]) -> Vec<Vec<String>> {
    vals.iter().map(|v| vec![v.to_string()]).collect()
}

#[tokio::test]
async fn writes_every_page_to_its_remapped_range() {
    let table = remap("B2".parse().unwrap(), &table()).unwrap();
    let mut site = FakeSite::default()
        .serve("HuntersCall/pondies", vec![Ok(page(&["1", "0", "2", "3", "4"]))])
        .serve("HuntersCall/merrick's-accolades", vec![Ok(page(&["5", "1", "1", "1", "1", "1", "1", "9"]))])
        .serve("BilgeRats/shrouded-spoils", vec![Ok(page(&["0", "0", "7", "0", "1", "2", "3", "4"]))]);
    let mut sheet = RecordingSheet::default();

    let summary = runner::run(&table, &mut site, &mut sheet, &RunOptions::default(), None)
        .await
        .unwrap();

    let ranges: Vec<&str> = sheet.writes.iter().map(|w| w.0.as_str()).collect();
    assert_eq!(ranges, vec!["E21:E25", "AE14:AE15", "AE19:AE24"]);
    assert!(sheet.writes.iter().all(|w| w.1 == ValueInput::UserEntered));
    assert_eq!(sheet.writes[0].2, rows(&["1", "", "2", "3", "4"]));
    assert_eq!(sheet.writes[1].2, rows(&["5", "9"]));
    assert_eq!(sheet.writes[2].2, rows(&["7", "", "1", "2", "3", "4"]));
    assert!(summary.skipped.is_empty());
    assert_eq!(summary.updated.len(), 3);
}

#[tokio::test]
async fn empty_page_is_retried_once_then_written() {
    let table = table().retain_names(&["pondies".to_string()]).unwrap();
    let mut site = FakeSite::default().serve(
        "HuntersCall/pondies",
        vec![Ok("<div id=app></div>".to_string()), Ok(page(&["4", "4", "4", "4", "4"]))],
    );
    let mut sheet = RecordingSheet::default();
    let mut log = Log::default();

    let summary = runner::run(&table, &mut site, &mut sheet, &RunOptions::default(), Some(&mut log))
        .await
        .unwrap();

    assert_eq!(site.requests.len(), 2);
    assert_eq!(summary.updated, vec![("pondies".to_string(), 5)]);
    assert_eq!(
        log.0,
        vec!["Updating Pondies", "Retrying pondies (2/2).", "done pondies 5"]
    );
}

#[tokio::test]
async fn page_that_stays_empty_is_skipped_and_run_continues() {
    let mut site = FakeSite::default()
        // pondies never renders
        .serve("HuntersCall/merrick's-accolades", vec![Ok(page(&["3"]))])
        .serve("BilgeRats/shrouded-spoils", vec![Ok(page(&["1", "1"]))]);
    let mut sheet = RecordingSheet::default();
    let mut log = Log::default();

    let summary = runner::run(&table(), &mut site, &mut sheet, &RunOptions::default(), Some(&mut log))
        .await
        .unwrap();

    // default policy: one try + one retry
    assert_eq!(site.requests.iter().filter(|r| r.ends_with("pondies")).count(), 2);
    // shrouded-spoils only has indices 0 and 1, none of which are selected
    assert_eq!(summary.skipped, vec!["pondies".to_string(), "shrouded-spoils".to_string()]);
    assert_eq!(summary.updated, vec![("merrick's-accolades".to_string(), 1)]);
    assert!(log.0.contains(&"failed pondies".to_string()));
    assert_eq!(sheet.writes.len(), 1);
}

#[tokio::test]
async fn retry_count_is_configurable() {
    let table = table().retain_names(&["pondies".to_string()]).unwrap();
    let opts = RunOptions { retry: RetryPolicy::new(3), ..RunOptions::default() };

    let mut site = FakeSite::default();
    let mut sheet = RecordingSheet::default();
    let summary = runner::run(&table, &mut site, &mut sheet, &opts, None).await.unwrap();
    assert_eq!(site.requests.len(), 4);
    assert_eq!(summary.skipped, vec!["pondies".to_string()]);

    let no_retry = RunOptions { retry: RetryPolicy::new(0), ..RunOptions::default() };
    let mut site = FakeSite::default();
    runner::run(&table, &mut site, &mut sheet, &no_retry, None).await.unwrap();
    assert_eq!(site.requests.len(), 1);
}

#[tokio::test]
async fn sheet_errors_stop_the_run() {
    let mut site = FakeSite::default()
        .serve("HuntersCall/pondies", vec![Ok(page(&["1"]))])
        .serve("HuntersCall/merrick's-accolades", vec![Ok(page(&["1"]))]);
    let mut sheet = RecordingSheet { fail_on: Some("D20:D24".to_string()), ..Default::default() };

    let err = runner::run(&table(), &mut site, &mut sheet, &RunOptions::default(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Sheets { ref range, .. } if range == "D20:D24"));
    // nothing after the failing write was fetched
    assert_eq!(site.requests, vec!["HuntersCall/pondies".to_string()]);
}

#[tokio::test]
async fn empty_table_does_nothing() {
    let mut site = FakeSite::default();
    let mut sheet = RecordingSheet::default();
    let summary = runner::run(&RangeTable::default(), &mut site, &mut sheet, &RunOptions::default(), None)
        .await
        .unwrap();
    assert_eq!(summary, RunSummary::default());
    assert!(site.requests.is_empty());
}
