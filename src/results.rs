use crate::error::ScrapeError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Title used when neither the document title nor an `h1` yields text
pub const NO_TITLE: &str = "No Title Found";

/// Title recorded on error documents
pub const ERROR_TITLE: &str = "Error";

/// One textual element taken from a page, in DOM order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedElement {
    /// Lowercase tag name (`h1`, `p`, `span`, ...)
    pub tag: String,

    /// Trimmed text content, never empty
    pub text: String,
}

impl ScrapedElement {
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
        }
    }
}

/// The persisted result of scraping one URL.
///
/// Success records carry `totalElements`, error records carry `error`; the
/// two constructors are the only way to build either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// 1-based position of the URL in the input sequence
    pub order_number: usize,

    pub url: String,

    pub title: String,

    pub content: Vec<ScrapedElement>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(serialize_with = "serialize_millis")]
    pub scraped_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<usize>,
}

impl DocumentRecord {
    /// Record for a page that was navigated and extracted
    pub fn success(
        order_number: usize,
        url: &str,
        title: String,
        content: Vec<ScrapedElement>,
    ) -> Self {
        let total_elements = content.len();
        Self {
            order_number,
            url: url.to_string(),
            title,
            content,
            error: None,
            scraped_at: Utc::now(),
            total_elements: Some(total_elements),
        }
    }

    /// Record for a page whose scrape attempt failed
    pub fn failure(order_number: usize, url: &str, error: &ScrapeError) -> Self {
        Self {
            order_number,
            url: url.to_string(),
            title: ERROR_TITLE.to_string(),
            content: Vec::new(),
            error: Some(error.to_string()),
            scraped_at: Utc::now(),
            total_elements: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// `document_<n>.json` or `document_<n>_error.json`
    pub fn file_name(&self) -> String {
        if self.is_error() {
            format!("document_{}_error.json", self.order_number)
        } else {
            format!("document_{}.json", self.order_number)
        }
    }
}

// ISO-8601 with millisecond precision, e.g. 2026-10-16T09:30:12.345Z
fn serialize_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Stage;
    use serde_json::Value;

    fn sample_content() -> Vec<ScrapedElement> {
        vec![
            ScrapedElement::new("h1", "Example Domain"),
            ScrapedElement::new("p", "This domain is for use in examples."),
        ]
    }

    #[test]
    fn test_success_record_fields() {
        let record = DocumentRecord::success(
            1,
            "https://example.com",
            "Example Domain".to_string(),
            sample_content(),
        );
        assert_eq!(record.total_elements, Some(2));
        assert!(!record.is_error());
        assert_eq!(record.file_name(), "document_1.json");

        let json: Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["orderNumber"], 1);
        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["totalElements"], 2);
        assert_eq!(json["content"][0]["tag"], "h1");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failure_record_fields() {
        let error = ScrapeError::browser(Stage::Navigate, "net::ERR_NAME_NOT_RESOLVED");
        let record = DocumentRecord::failure(3, "https://bad.invalid", &error);
        assert!(record.is_error());
        assert_eq!(record.file_name(), "document_3_error.json");

        let json: Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["title"], "Error");
        assert_eq!(json["content"], Value::Array(Vec::new()));
        assert_eq!(
            json["error"],
            "navigate failed: net::ERR_NAME_NOT_RESOLVED"
        );
        assert!(json.get("totalElements").is_none());
    }

    #[test]
    fn test_scraped_at_uses_millisecond_utc() {
        let record = DocumentRecord::success(1, "https://example.com", NO_TITLE.to_string(), vec![]);
        let json: Value = serde_json::to_value(&record).unwrap();
        let stamp = json["scrapedAt"].as_str().unwrap();

        assert!(stamp.ends_with('Z'), "expected UTC suffix: {}", stamp);
        let fraction = stamp.rsplit('.').next().unwrap();
        assert_eq!(fraction.len(), 4, "expected three fractional digits: {}", stamp);
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn test_record_reads_back() {
        let record = DocumentRecord::success(
            2,
            "https://example.org",
            "Example".to_string(),
            sample_content(),
        );
        let json = serde_json::to_string(&record).unwrap();
        let parsed: DocumentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.order_number, 2);
        assert_eq!(parsed.content, record.content);
        assert_eq!(parsed.total_elements, Some(2));
        assert_eq!(parsed.error, None);
    }
}
