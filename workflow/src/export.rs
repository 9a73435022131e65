//! Plain-text export of a result set.

use crate::error::HostResult;
use crate::models::AnalysisResult;
use crate::render::strip_extension;

/// MIME type of the exported file.
pub const EXPORT_MIME_TYPE: &str = "text/plain;charset=utf-8";

/// Suffix appended to the base name of the uploaded file.
pub const EXPORT_SUFFIX: &str = "-results.txt";

/// A file ready to be handed to the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsExport {
    pub file_name: String,
    pub contents: String,
}

impl ResultsExport {
    pub fn new(display_key: &str, result: &AnalysisResult) -> HostResult<Self> {
        Ok(Self {
            file_name: export_file_name(display_key),
            contents: serde_json::to_string_pretty(result)?,
        })
    }
}

/// `photo.jpeg` -> `photo-results.txt`
pub fn export_file_name(display_key: &str) -> String {
    format!("{}{}", strip_extension(display_key), EXPORT_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_name() {
        assert_eq!(export_file_name("orange.jpg"), "orange-results.txt");
        assert_eq!(export_file_name("archive.tar.png"), "archive.tar-results.txt");
        assert_eq!(export_file_name("noext"), "noext-results.txt");
    }

    #[test]
    fn test_contents_are_indented_and_ordered() {
        let result = AnalysisResult::from_value(json!({
            "ImageKey": "a1.jpeg",
            "Labels": [{"Name": "Orange", "Confidence": 95}]
        }))
        .unwrap();

        let export = ResultsExport::new("orange.jpg", &result).unwrap();
        let expected = "{\n  \"ImageKey\": \"a1.jpeg\",\n  \"Labels\": [\n    {\n      \"Name\": \"Orange\",\n      \"Confidence\": 95\n    }\n  ]\n}";
        assert_eq!(export.contents, expected);
        assert_eq!(export.file_name, "orange-results.txt");
    }
}
