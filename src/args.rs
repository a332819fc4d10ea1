use clap::Parser;
use scrape_pages::ScraperConfig;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scrape-pages")]
#[command(about = "Scrapes headings and text from interactively entered URLs into JSON documents")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// WebDriver endpoint (overrides config and WEBDRIVER_URL)
    #[arg(short, long)]
    pub webdriver_url: Option<String>,

    /// Directory for the document files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Navigation timeout in seconds
    #[arg(long)]
    pub navigation_timeout: Option<u64>,

    /// Delay after DOM-ready before extraction, in milliseconds
    #[arg(long)]
    pub settle_delay: Option<u64>,
}

impl Args {
    /// Builds the effective configuration: file, then environment, then flags
    pub fn into_config(self) -> Result<ScraperConfig, Box<dyn Error>> {
        self.into_config_with_env(std::env::vars())
    }

    fn into_config_with_env<I>(self, vars: I) -> Result<ScraperConfig, Box<dyn Error>>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = match &self.config {
            Some(path) => ScraperConfig::from_file(path)?,
            None => ScraperConfig::default(),
        };
        config.apply_env_from(vars);

        if let Some(webdriver_url) = self.webdriver_url {
            config.webdriver_url = webdriver_url;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(secs) = self.navigation_timeout {
            config.navigation_timeout_secs = secs;
        }
        if let Some(millis) = self.settle_delay {
            config.settle_delay_ms = millis;
        }

        // Reject bad values before the operator starts typing URLs
        config.validate()?;
        Ok(config)
    }
}
