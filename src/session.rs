use crate::browser::PageDriver;
use crate::config::ScraperConfig;
use crate::error::{RunError, ScrapeError, WriteError};
use crate::parsers::html;
use crate::results::{DocumentRecord, ScrapedElement};
use crate::writer::DocumentWriter;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Title and content pulled from one page
#[derive(Debug, Clone)]
struct ScrapedPage {
    title: String,
    content: Vec<ScrapedElement>,
}

/// Drives a single browser tab through the URLs of a run, one at a time.
///
/// Every URL gets exactly one attempt and exactly one document. A scrape
/// failure turns into an error document; a write failure ends the run.
pub struct ScrapeSession<D: PageDriver> {
    driver: D,
    writer: DocumentWriter,
    navigation_timeout: Duration,
    settle_delay: Duration,
}

impl<D: PageDriver> ScrapeSession<D> {
    pub fn new(driver: D, writer: DocumentWriter, config: &ScraperConfig) -> Self {
        Self {
            driver,
            writer,
            navigation_timeout: config.navigation_timeout(),
            settle_delay: config.settle_delay(),
        }
    }

    /// Scrapes `urls` in order, then closes the browser.
    ///
    /// The driver is closed on every return path, including a failed write.
    pub async fn run(mut self, urls: &[String]) -> Result<RunSummary, RunError> {
        let outcome = self.scrape_all(urls).await;

        if let Err(e) = self.driver.close().await {
            ::log::warn!("Failed to close browser session: {}", e);
        }

        Ok(outcome?)
    }

    async fn scrape_all(&mut self, urls: &[String]) -> Result<RunSummary, WriteError> {
        let mut summary = RunSummary::default();

        for (index, url) in urls.iter().enumerate() {
            let order_number = index + 1;
            let record = self.scrape_one(order_number, url).await;
            let path = self.writer.write(&record)?;

            summary.processed += 1;
            if record.is_error() {
                summary.failed += 1;
            } else {
                summary.succeeded += 1;
                ::log::info!(
                    "Saved document data to {} ({} elements found)",
                    path.display(),
                    record.content.len()
                );
            }
        }

        Ok(summary)
    }

    /// Runs one URL through navigate, settle and extract, producing its record
    pub async fn scrape_one(&mut self, order_number: usize, url: &str) -> DocumentRecord {
        ::log::info!("Scraping URL: {} (Order: {})", url, order_number);

        match self.scrape_page(url).await {
            Ok(page) => DocumentRecord::success(order_number, url, page.title, page.content),
            Err(e) => {
                ::log::error!("Error scraping URL: {} {}", url, e);
                DocumentRecord::failure(order_number, url, &e)
            }
        }
    }

    async fn scrape_page(&mut self, url: &str) -> Result<ScrapedPage, ScrapeError> {
        timeout(self.navigation_timeout, self.driver.navigate(url))
            .await
            .map_err(|_| ScrapeError::NavigationTimeout {
                url: url.to_string(),
                timeout: self.navigation_timeout,
            })??;

        // Give deferred scripts time to fill the page
        sleep(self.settle_delay).await;

        let document_title = self.driver.title().await?;
        let source = self.driver.source().await?;
        let parsed = html::parse(&source);

        Ok(ScrapedPage {
            title: parsed.resolve_title(&document_title),
            content: parsed.elements,
        })
    }
}
