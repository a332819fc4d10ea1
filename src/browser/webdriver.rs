use crate::browser::PageDriver;
use crate::config::ScraperConfig;
use crate::error::{ConnectError, ScrapeError, Stage};
use fantoccini::wd::Capabilities;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;

// Common WebDriver ports tried when the configured endpoint refuses
const FALLBACK_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// One WebDriver session, used as the single tab of a scrape run
pub struct WebDriverPage {
    client: Client,
}

impl WebDriverPage {
    /// Starts a browser session, trying the configured endpoint first
    pub async fn connect(config: &ScraperConfig) -> Result<Self, ConnectError> {
        let capabilities = build_capabilities(config);
        let mut tried = Vec::new();

        let candidates = std::iter::once(config.webdriver_url.as_str())
            .chain(FALLBACK_URLS.iter().copied().filter(|url| *url != config.webdriver_url));

        for url in candidates {
            tried.push(url.to_string());

            let mut builder = ClientBuilder::native();
            builder.capabilities(capabilities.clone());
            match builder.connect(url).await {
                Ok(client) => {
                    ::log::debug!("Connected to WebDriver at {}", url);
                    return Ok(Self { client });
                }
                Err(e) if url == config.webdriver_url => {
                    ::log::warn!("Failed to connect to WebDriver at {}: {}", url, e);
                }
                Err(_) => {
                    // Don't log error for fallbacks to avoid log spam
                }
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(ConnectError { tried })
    }
}

/// Session capabilities: DOM-ready page loads, bounded load time, headless, custom UA
pub fn build_capabilities(config: &ScraperConfig) -> Capabilities {
    let mut chrome_args = vec![format!("--user-agent={}", config.user_agent)];
    let mut firefox_args = Vec::new();
    if config.headless {
        chrome_args.push("--headless=new".to_string());
        firefox_args.push("-headless".to_string());
    }

    let capabilities = json!({
        "pageLoadStrategy": "eager",
        "timeouts": {
            "pageLoad": u64::try_from(config.navigation_timeout().as_millis()).unwrap_or(u64::MAX),
        },
        "goog:chromeOptions": {
            "args": chrome_args,
        },
        "moz:firefoxOptions": {
            "args": firefox_args,
            "prefs": {
                "general.useragent.override": config.user_agent,
            },
        },
    });

    match capabilities {
        serde_json::Value::Object(map) => map,
        _ => Capabilities::new(),
    }
}

impl PageDriver for WebDriverPage {
    async fn navigate(&mut self, url: &str) -> Result<(), ScrapeError> {
        self.client
            .goto(url)
            .await
            .map_err(|e| ScrapeError::browser(Stage::Navigate, e))
    }

    async fn title(&mut self) -> Result<String, ScrapeError> {
        self.client
            .title()
            .await
            .map_err(|e| ScrapeError::browser(Stage::ReadTitle, e))
    }

    async fn source(&mut self) -> Result<String, ScrapeError> {
        self.client
            .source()
            .await
            .map_err(|e| ScrapeError::browser(Stage::ReadSource, e))
    }

    async fn close(self) -> Result<(), ScrapeError> {
        self.client
            .close()
            .await
            .map_err(|e| ScrapeError::browser(Stage::Close, e))
    }
}
