// src/cli.rs
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};

use crate::{
    config::{
        BrowserOptions, RetryPolicy, RunOptions, anchors,
        consts::{DEFAULT_CREDENTIALS, DEFAULT_RETRIES, RENDER_TIMEOUT_SECS},
    },
    core::{Coordinate, net::BrowserSource},
    error::{Error, Result},
    progress::ConsoleProgress,
    runner::{self, RunSummary},
    sheet::{
        self, DryRun, GoogleSheets, RangeTable, SheetSink,
        auth::{ServiceAccount, ServiceAccountKey},
    },
};

/// Scrape commendation progress from your pirate profile into the shared tracker sheet.
#[derive(Parser, Debug, Clone)]
#[command(name = "sot_scrape", version, about)]
pub struct Args {
    /// Who is running this; picks your section of the sheet (e.g. "ethan", "c")
    #[arg(long, env = "NAME")]
    pub name: Option<String>,

    /// Top-left cell of your section, overrides --name (e.g. "B30")
    #[arg(long, value_name = "CELL")]
    pub anchor: Option<String>,

    /// Value of the site's `rat` session cookie
    #[arg(long, env = "TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Target spreadsheet id
    #[arg(long, env = "SHEET_ID")]
    pub sheet_id: Option<String>,

    /// Service-account key file
    #[arg(long, env = "GOOGLE_AUTH", default_value = DEFAULT_CREDENTIALS)]
    pub credentials: PathBuf,

    /// JSON range table to use instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub table: Option<PathBuf>,

    /// Only these pages (comma separated names)
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub only: Vec<String>,

    /// Extra attempts for a page that comes back empty
    #[arg(long, default_value_t = DEFAULT_RETRIES)]
    pub retries: u32,

    /// Seconds to wait for a page's progress values to render
    #[arg(long, default_value_t = RENDER_TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,

    /// Print the rows instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the resolved range table and exit
    #[arg(long)]
    pub list: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

/// Pull `NAME=...` style settings from a `.env` file into the environment so
/// clap's `env` fallbacks see them. Variables already set are left alone.
/// With no path, looks for `.env` in the working directory and its parents.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
    let found = match path {
        Some(p) => dotenvy::from_path(p).map(|_| p.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    match found {
        Ok(p) => Ok(Some(p)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(Error::Config(format!("reading .env: {e}"))),
    }
}

/// `--anchor` if given, otherwise the anchor registered for `--name`.
pub fn resolve_anchor(args: &Args) -> Result<Coordinate> {
    if let Some(cell) = &args.anchor {
        return cell.parse();
    }
    match &args.name {
        Some(name) => anchors::resolve(name),
        None => Err(Error::Config(format!(
            "no NAME set; add NAME=<one of {}> to your environment or pass --anchor <CELL>",
            anchors::known_ids().join(", ")
        ))),
    }
}

/// Base table (built-in or `--table`), narrowed by `--only`, moved to `anchor`.
pub fn build_table(args: &Args, anchor: Coordinate) -> Result<RangeTable> {
    let mut table = match &args.table {
        Some(path) => RangeTable::load(path)?,
        None => RangeTable::builtin(),
    };
    if !args.only.is_empty() {
        table = table.retain_names(&args.only)?;
    }
    sheet::remap(anchor, &table)
}

pub fn format_table(table: &RangeTable) -> String {
    let mut out = s!();
    for e in table {
        let idx: Vec<String> = e.indices.iter().map(|i| i.to_string()).collect();
        out.push_str(&format!("{}\t{}\t{}\t[{}]\n", e.name, e.range, e.group, idx.join(", ")));
    }
    out
}

pub async fn run(args: Args) -> Result<RunSummary> {
    crate::log::init(args.verbose);

    // configuration problems surface before any browser or network work
    let anchor = resolve_anchor(&args)?;
    let table = build_table(&args, anchor)?;
    info!("anchor {} ({} pages)", anchor, table.len());

    if args.list {
        print!("{}", format_table(&table));
        return Ok(RunSummary::default());
    }

    let token = args
        .token
        .clone()
        .ok_or_else(|| Error::Config(s!("no TOKEN set; copy your `rat` cookie into TOKEN")))?;

    let mut sink: Box<dyn SheetSink + Send> = if args.dry_run {
        Box::new(DryRun::new(std::io::stdout()))
    } else {
        let sheet_id = args
            .sheet_id
            .clone()
            .ok_or_else(|| Error::Config(s!("no SHEET_ID set")))?;
        let key = ServiceAccountKey::load(&args.credentials)?;
        let http = reqwest::Client::new();
        Box::new(GoogleSheets::new(sheet_id, ServiceAccount::new(key, http.clone()), http))
    };

    let mut browser_opts = BrowserOptions::new(token);
    browser_opts.render_timeout = std::time::Duration::from_secs(args.timeout);
    let mut source = BrowserSource::launch(browser_opts).await?;

    let opts = RunOptions { retry: RetryPolicy::new(args.retries), ..RunOptions::default() };
    let mut progress = ConsoleProgress::new();

    let result = tokio::select! {
        res = runner::run(&table, &mut source, sink.as_mut(), &opts, Some(&mut progress)) => res,
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted");
            Err(Error::Interrupted)
        }
    };

    if let Err(e) = source.close().await {
        warn!("closing browser: {e}");
    }
    result
}
