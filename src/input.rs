use crate::error::InputError;
use std::io::{BufRead, Write};

const FIRST_PROMPT: &str = "Enter URLs (one per line, press Enter twice when done):";
const EMPTY_PROMPT: &str = "Please enter at least one URL:";
const NEXT_PROMPT: &str = "Enter next URL (or press Enter to finish):";

/// Trims a raw line and defaults its scheme to `https://`.
///
/// Returns `None` for blank input. Anything already starting with `http` is
/// kept as typed; no other validation happens here.
pub fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with("http") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{}", trimmed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollectorState {
    WaitingForFirstUrl,
    Accepting,
    Done,
}

/// Reads URLs line by line until an empty line follows at least one URL
pub struct UrlCollector<R, W> {
    reader: R,
    prompt: W,
    urls: Vec<String>,
    state: CollectorState,
}

impl<R: BufRead, W: Write> UrlCollector<R, W> {
    pub fn new(reader: R, prompt: W) -> Self {
        Self {
            reader,
            prompt,
            urls: Vec::new(),
            state: CollectorState::WaitingForFirstUrl,
        }
    }

    /// Drives the prompt to completion and returns the URLs in entry order
    pub fn collect(mut self) -> Result<Vec<String>, InputError> {
        writeln!(self.prompt, "{}", FIRST_PROMPT)?;
        self.prompt.flush()?;

        let mut line = String::new();
        while self.state != CollectorState::Done {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                // EOF counts as the finishing empty line
                if self.urls.is_empty() {
                    return Err(InputError::NoUrls);
                }
                self.state = CollectorState::Done;
                break;
            }
            self.accept_line(&line)?;
        }

        ::log::debug!("Collected {} URL(s)", self.urls.len());
        Ok(self.urls)
    }

    fn accept_line(&mut self, line: &str) -> Result<(), InputError> {
        match (normalize_url(line), self.state) {
            (None, CollectorState::WaitingForFirstUrl) => {
                writeln!(self.prompt, "{}", EMPTY_PROMPT)?;
            }
            (None, _) => {
                self.state = CollectorState::Done;
            }
            (Some(url), _) => {
                writeln!(self.prompt, "Added: {}", url)?;
                writeln!(self.prompt, "{}", NEXT_PROMPT)?;
                self.urls.push(url);
                self.state = CollectorState::Accepting;
            }
        }
        self.prompt.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(input: &str) -> (Result<Vec<String>, InputError>, String) {
        let mut prompt = Vec::new();
        let result = UrlCollector::new(Cursor::new(input), &mut prompt).collect();
        (result, String::from_utf8(prompt).unwrap())
    }

    #[test]
    fn test_normalize_adds_https() {
        assert_eq!(
            normalize_url("example.com").as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            normalize_url("  www.rust-lang.org/learn \n").as_deref(),
            Some("https://www.rust-lang.org/learn")
        );
    }

    #[test]
    fn test_normalize_keeps_http_prefix() {
        assert_eq!(
            normalize_url("http://example.com").as_deref(),
            Some("http://example.com")
        );
        assert_eq!(
            normalize_url("https://example.com/a?b=c").as_deref(),
            Some("https://example.com/a?b=c")
        );
        // Prefix check only, no scheme parsing
        assert_eq!(normalize_url("httpbin.org").as_deref(), Some("httpbin.org"));
    }

    #[test]
    fn test_normalize_blank_is_none() {
        assert_eq!(normalize_url(""), None);
        assert_eq!(normalize_url("   \t"), None);
    }

    #[test]
    fn test_single_url() {
        let (result, prompt) = collect("example.com\n\n");
        assert_eq!(result.unwrap(), vec!["https://example.com"]);
        assert!(prompt.starts_with(FIRST_PROMPT));
        assert!(prompt.contains("Added: https://example.com"));
    }

    #[test]
    fn test_order_preserved() {
        let (result, _) = collect("b.com\nhttps://a.com\nc.org/path\n\nignored.com\n");
        assert_eq!(
            result.unwrap(),
            vec!["https://b.com", "https://a.com", "https://c.org/path"]
        );
    }

    #[test]
    fn test_leading_empty_line_reprompts() {
        let (result, prompt) = collect("\nexample.com\n\n");
        assert_eq!(result.unwrap(), vec!["https://example.com"]);
        assert!(prompt.contains(EMPTY_PROMPT));
    }

    #[test]
    fn test_whitespace_line_counts_as_empty() {
        let (result, _) = collect("   \nexample.com\n  \t\n");
        assert_eq!(result.unwrap(), vec!["https://example.com"]);
    }

    #[test]
    fn test_eof_finishes_collection() {
        let (result, _) = collect("example.com\nexample.org");
        assert_eq!(
            result.unwrap(),
            vec!["https://example.com", "https://example.org"]
        );
    }

    #[test]
    fn test_eof_without_urls_is_error() {
        let (result, _) = collect("\n\n");
        assert!(matches!(result, Err(InputError::NoUrls)));
    }
}
