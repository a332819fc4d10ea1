use clap::Parser;
use scrape_pages::error::{InputError, RunError};
use scrape_pages::input::UrlCollector;
use std::io;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Progress is reported through the logger, so show info by default
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let args = Args::parse();
    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Fatal error: invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::debug!("Run aborted: {:?}", e);
            eprintln!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: scrape_pages::ScraperConfig) -> Result<(), RunError> {
    let urls = tokio::task::spawn_blocking(|| {
        UrlCollector::new(io::stdin().lock(), io::stdout()).collect()
    })
    .await
    .map_err(|e| InputError::Io(io::Error::other(e)))??;

    println!("\nStarting to scrape {} URL(s)...\n", urls.len());
    ::log::info!(
        "Writing documents to {} via WebDriver at {}",
        config.output_dir.display(),
        config.webdriver_url
    );

    let start_time = std::time::Instant::now();
    let summary = scrape_pages::scrape_urls(&config, &urls).await?;

    ::log::info!(
        "{} succeeded, {} failed in {:.2} seconds",
        summary.succeeded,
        summary.failed,
        start_time.elapsed().as_secs_f64()
    );
    println!("\nScraping completed! Processed {} URL(s).", summary.processed);
    Ok(())
}
