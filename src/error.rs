use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Step of a page scrape that talks to the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Navigate,
    ReadTitle,
    ReadSource,
    Close,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Navigate => "navigate",
            Stage::ReadTitle => "read title",
            Stage::ReadSource => "read page source",
            Stage::Close => "close browser",
        };
        f.write_str(name)
    }
}

/// Failure of a single URL. Recorded in the error document, never propagated.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("navigation to {url} timed out after {}ms", .timeout.as_millis())]
    NavigationTimeout { url: String, timeout: Duration },

    #[error("{stage} failed: {message}")]
    Browser { stage: Stage, message: String },
}

impl ScrapeError {
    pub fn browser(stage: Stage, error: impl fmt::Display) -> Self {
        ScrapeError::Browser {
            stage,
            message: error.to_string(),
        }
    }
}

/// Errors while collecting URLs from the operator
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input closed before any URL was entered")]
    NoUrls,

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Errors while persisting a document record
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// No WebDriver endpoint accepted a new session
#[derive(Debug, Error)]
#[error("could not start a WebDriver session (tried {})", .tried.join(", "))]
pub struct ConnectError {
    pub tried: Vec<String>,
}

/// Anything that ends the run with a non-zero exit code
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Connect(#[from] ConnectError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("invalid configuration: {0}")]
    Config(String),
}
