use crate::parsers::ParseResult;
use crate::results::ScrapedElement;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Elements whose text makes up a document's content
pub const CONTENT_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, span";

static CONTENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(CONTENT_SELECTOR).expect("content selector is valid"));

static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("heading selector is valid"));

/// Parses a page source into its first heading and textual elements
pub fn parse(html: &str) -> ParseResult {
    let doc = Html::parse_document(html);

    let heading = first_heading(&doc);
    let elements = extract_elements(&doc);

    ::log::debug!(
        "HTML parser found {} elements (h1 present: {})",
        elements.len(),
        heading.is_some()
    );

    ParseResult::new(heading, elements)
}

/// Trimmed text of the first `h1`, `None` when absent or blank
pub fn first_heading(doc: &Html) -> Option<String> {
    doc.select(&HEADING)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// Headings, paragraphs and spans in document order, blank ones dropped.
///
/// Nested matches are kept separately, so a `span` inside a `p` shows up
/// both on its own and as part of the paragraph text.
pub fn extract_elements(doc: &Html) -> Vec<ScrapedElement> {
    doc.select(&CONTENT)
        .filter_map(|el| {
            let text = element_text(el);
            if text.is_empty() {
                return None;
            }
            Some(ScrapedElement::new(el.value().name().to_ascii_lowercase(), text))
        })
        .collect()
}

// Equivalent of the DOM's textContent, trimmed
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
