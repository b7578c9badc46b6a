//! JSON rendering.
//!
//! Produces a single JSON document with the normalized URL and the four
//! attribute groups. The format is ideal for piping to `jq` or for
//! programmatic processing in scripts.

use crate::analysis::AnalysisReport;

/// Renders the report as a pretty-printed JSON document.
pub fn render_json(report: &AnalysisReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::render_json;
    use crate::analysis::analyze;

    #[test]
    fn test_json_output_is_valid() {
        let report = analyze("http://bit.ly/xyz").unwrap();
        let out = render_json(&report);

        let doc: serde_json::Value = serde_json::from_str(&out).expect("output should be JSON");
        assert_eq!(doc["url"], "http://bit.ly/xyz");
        assert_eq!(doc["groups"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_json_output_carries_status_tags() {
        let report = analyze("http://bit.ly/xyz").unwrap();
        let doc: serde_json::Value = serde_json::from_str(&render_json(&report)).unwrap();

        let security = &doc["groups"][3];
        assert_eq!(security["group"], "Security Check");

        let https = &security["entries"][0];
        assert_eq!(https["label"], "HTTPS");
        assert_eq!(https["value"], "❌ Insecure");
        assert_eq!(https["status"], "bad");
    }

    #[test]
    fn test_json_output_omits_absent_status() {
        let report = analyze("example.com").unwrap();
        let doc: serde_json::Value = serde_json::from_str(&render_json(&report)).unwrap();

        let website = &doc["groups"][0]["entries"][0];
        assert_eq!(website["label"], "Website");
        assert!(website.get("status").is_none());
    }
}
