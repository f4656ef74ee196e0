// src/log.rs
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "sot_scrape=info";
const VERBOSE_DIRECTIVE: &str = "sot_scrape=debug";

/// Install the global subscriber. Logs go to stderr, stamped with time since start.
/// `RUST_LOG` wins over the defaults when set.
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_DIRECTIVE } else { DEFAULT_DIRECTIVE };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    // try_init: a second call (tests, embedding) is not an error
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::uptime())
        .with_target(false)
        .try_init();
}
