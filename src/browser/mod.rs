pub mod webdriver;

pub use webdriver::WebDriverPage;

use crate::error::ScrapeError;

/// The browser capabilities a scrape session needs from a single tab.
///
/// `navigate` resolves once the DOM is ready; the session bounds it with its
/// own timeout on top of whatever the driver enforces.
#[allow(async_fn_in_trait)]
pub trait PageDriver {
    /// Load `url` and wait for DOM-ready
    async fn navigate(&mut self, url: &str) -> Result<(), ScrapeError>;

    /// Current `document.title`, possibly empty
    async fn title(&mut self) -> Result<String, ScrapeError>;

    /// Serialized live DOM of the current page
    async fn source(&mut self) -> Result<String, ScrapeError>;

    /// End the browser session
    async fn close(self) -> Result<(), ScrapeError>;
}
