pub mod html;


use crate::results::{NO_TITLE, ScrapedElement};

/// Result of parsing a page's live DOM
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Trimmed text of the first `h1`, if it has any
    pub heading: Option<String>,
    /// Textual elements in document order
    pub elements: Vec<ScrapedElement>,
}

impl ParseResult {
    pub fn new(heading: Option<String>, elements: Vec<ScrapedElement>) -> Self {
        Self { heading, elements }
    }

    /// Picks the page title: document title, then first `h1`, then the sentinel.
    /// Whichever source wins is returned trimmed.
    pub fn resolve_title(&self, document_title: &str) -> String {
        non_empty(document_title)
            .or_else(|| self.heading.as_deref().and_then(non_empty))
            .unwrap_or(NO_TITLE)
            .to_string()
    }
}

fn non_empty(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
