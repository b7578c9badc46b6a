//! Tests pinning the exact user-facing error messages.

use url_inspector::{analyze, AnalysisError};

#[test]
fn test_empty_input_message_is_exact() {
    for input in ["", " ", "\t", "\n", "   \t\n  "] {
        let err = analyze(input).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput));
        assert_eq!(err.to_string(), "Please enter a URL to analyze");
    }
}

#[test]
fn test_invalid_url_message_is_exact() {
    for input in [
        "http://exa mple.com",
        "https://",
        "http://[not-ipv6]",
        "://example.com",
    ] {
        let err = analyze(input).unwrap_err();
        assert!(
            matches!(err, AnalysisError::InvalidUrl(_)),
            "{input:?} should be invalid"
        );
        assert_eq!(
            err.to_string(),
            "Invalid URL format. Please check your URL and try again."
        );
    }
}

#[test]
fn test_error_messages_carry_no_diagnostic_detail() {
    // The parser's diagnostics must never leak into the user-facing message
    let err = analyze("https://").unwrap_err();
    let msg = err.to_string();
    assert!(!msg.contains("host"));
    assert!(!msg.contains("parse"));
}
