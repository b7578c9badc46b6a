//! URL normalization and parsing.

use lazy_static::lazy_static;
use log::debug;

use regex::Regex;

use crate::error_handling::AnalysisError;

lazy_static! {
    // Schemes accepted as already explicit; anything else gets an https://
    // prefix. Matched case-insensitively, so HTTP:// counts too.
    static ref EXPLICIT_SCHEME: Regex = Regex::new(r"(?i)^(?:https?|ftp)://").unwrap();
}

/// Normalizes a raw URL string.
///
/// Trims leading/trailing whitespace, then prepends `https://` unless the
/// string already begins with `http://`, `https://`, or `ftp://`
/// (case-insensitive). The result always carries an explicit scheme.
///
/// # Arguments
///
/// * `raw` - The URL string as supplied by the user
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] if the string is empty or all
/// whitespace after trimming.
pub fn normalize_url(raw: &str) -> Result<String, AnalysisError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    if EXPLICIT_SCHEME.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("https://{trimmed}"))
    }
}

/// Parses a normalized URL string into its structural representation.
///
/// Delegates syntax validation to [`url::Url::parse`].
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidUrl`] if parsing fails for any reason
/// (malformed authority, illegal characters, etc.). The parser's diagnostic
/// detail is logged but never shown to the user.
pub fn parse_url(normalized: &str) -> Result<url::Url, AnalysisError> {
    url::Url::parse(normalized).map_err(|e| {
        debug!("Failed to parse URL {normalized:?}: {e}");
        AnalysisError::InvalidUrl(e)
    })
}
