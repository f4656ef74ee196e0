// src/core/net.rs
// Rendered page source. The profile pages are built client-side, so a plain
// GET only returns the shell; a headless browser waits for the progress
// elements to exist before handing back the markup.

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::network::CookieParam;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::BrowserOptions;
use crate::config::consts::{PROGRESS_CLASS, RENDER_POLL_MS, SESSION_COOKIE};
use crate::error::{Error, Result};

/// Anything that can hand back page markup for a site path like `"HuntersCall/pondies"`.
#[async_trait]
pub trait PageSource {
    async fn fetch(&mut self, path: &str) -> Result<String>;
}

/// One headless Chromium with one tab, reused for every page.
pub struct BrowserSource {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
    opts: BrowserOptions,
}

impl BrowserSource {
    pub async fn launch(opts: BrowserOptions) -> Result<Self> {
        let config = BrowserConfig::builder().build().map_err(Error::Browser)?;
        let (browser, mut events) = Browser::launch(config).await?;

        // the CDP connection only makes progress while its handler is polled
        let handler = tokio::spawn(async move {
            while let Some(ev) = events.next().await {
                if ev.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;
        info!("browser ready");
        Ok(Self { browser, page, handler, opts })
    }

    pub async fn close(mut self) -> Result<()> {
        self.browser.close().await?;
        if let Err(e) = self.browser.wait().await {
            debug!("waiting for browser exit: {e}");
        }
        self.handler.abort();
        Ok(())
    }

    fn url_for(&self, path: &str) -> String {
        join!(&self.opts.base_url, path)
    }

    /// Poll until an element with the progress class shows up, or time out.
    async fn wait_for_progress(&self) -> Result<()> {
        let selector = join!(".", PROGRESS_CLASS);
        let poll = async {
            loop {
                if self.page.find_element(selector.as_str()).await.is_ok() {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(RENDER_POLL_MS)).await;
            }
        };
        tokio::time::timeout(self.opts.render_timeout, poll)
            .await
            .map_err(|_| {
                Error::Browser(format!(
                    "no {} after {:?}; is the session token still valid?",
                    PROGRESS_CLASS, self.opts.render_timeout
                ))
            })
    }
}

#[async_trait]
impl PageSource for BrowserSource {
    async fn fetch(&mut self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        debug!("opening {url}");

        // cookie can only be scoped once we are on the site's origin
        self.page.goto(url.as_str()).await?;
        let cookie = CookieParam::builder()
            .name(SESSION_COOKIE)
            .value(self.opts.token.as_str())
            .url(url.as_str())
            .build()
            .map_err(Error::Browser)?;
        self.page.set_cookie(cookie).await?;
        self.page.goto(url.as_str()).await?;

        self.wait_for_progress().await?;
        Ok(self.page.content().await?)
    }
}
