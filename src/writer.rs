use crate::error::WriteError;
use crate::results::DocumentRecord;
use std::fs;
use std::path::PathBuf;

/// Persists document records as pretty-printed JSON files
#[derive(Debug, Clone)]
pub struct DocumentWriter {
    output_dir: PathBuf,
}

impl DocumentWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writes `record` to its file name under the output directory,
    /// replacing any file left by an earlier run.
    pub fn write(&self, record: &DocumentRecord) -> Result<PathBuf, WriteError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| WriteError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.output_dir.join(record.file_name());
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json).map_err(|source| WriteError::Io {
            path: path.clone(),
            source,
        })?;

        ::log::debug!("Wrote {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ScrapeError, Stage};
    use crate::results::ScrapedElement;
    use serde_json::Value;

    #[test]
    fn test_writes_success_document() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DocumentWriter::new(dir.path());
        let record = DocumentRecord::success(
            1,
            "https://example.com",
            "Example Domain".to_string(),
            vec![ScrapedElement::new("h1", "Example Domain")],
        );

        let path = writer.write(&record).unwrap();
        assert_eq!(path, dir.path().join("document_1.json"));

        let written = fs::read_to_string(&path).unwrap();
        // Two-space indentation
        assert!(written.contains("\n  \"orderNumber\": 1"));
        let json: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["title"], "Example Domain");
        assert_eq!(json["totalElements"], 1);
    }

    #[test]
    fn test_writes_error_document() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DocumentWriter::new(dir.path());
        let error = ScrapeError::browser(Stage::Navigate, "connection refused");
        let record = DocumentRecord::failure(4, "https://bad.invalid", &error);

        let path = writer.write(&record).unwrap();
        assert_eq!(path, dir.path().join("document_4_error.json"));
        assert!(!dir.path().join("document_4.json").exists());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let writer = DocumentWriter::new(dir.path());
        fs::write(dir.path().join("document_1.json"), "stale").unwrap();

        let record = DocumentRecord::success(1, "https://example.com", "New".to_string(), vec![]);
        writer.write(&record).unwrap();

        let json: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("document_1.json")).unwrap())
                .unwrap();
        assert_eq!(json["title"], "New");
    }

    #[test]
    fn test_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("docs");
        let writer = DocumentWriter::new(&nested);

        let record = DocumentRecord::success(2, "https://example.org", "T".to_string(), vec![]);
        writer.write(&record).unwrap();
        assert!(nested.join("document_2.json").is_file());
    }

    #[test]
    fn test_unwritable_target_is_error() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the output directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let writer = DocumentWriter::new(&blocker);

        let record = DocumentRecord::success(1, "https://example.com", "T".to_string(), vec![]);
        assert!(matches!(
            writer.write(&record),
            Err(WriteError::CreateDir { .. })
        ));
    }
}
