// Re-export modules
pub mod browser;
pub mod config;
pub mod error;
pub mod input;
pub mod parsers;
pub mod results;
pub mod session;
pub mod writer;

// Re-export commonly used types for convenience
pub use browser::{PageDriver, WebDriverPage};
pub use config::ScraperConfig;
pub use error::{RunError, ScrapeError};
pub use results::{DocumentRecord, ScrapedElement};
pub use session::{RunSummary, ScrapeSession};
pub use writer::DocumentWriter;

/// Connects to WebDriver and scrapes `urls` into document files
pub async fn scrape_urls(config: &ScraperConfig, urls: &[String]) -> Result<RunSummary, RunError> {
    config.validate().map_err(RunError::Config)?;

    let driver = WebDriverPage::connect(config).await?;
    let writer = DocumentWriter::new(&config.output_dir);

    ScrapeSession::new(driver, writer, config).run(urls).await
}
