//! Heuristic security flags.
//!
//! These are indicative hints derived from the URL text alone, not verified
//! classifications. The suspicious-URL check in particular is a crude,
//! false-positive-prone set of five fixed patterns.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use super::report::{Attribute, AttributeGroup, GroupKind};

lazy_static! {
    // A percent-encoded byte: % followed by two hex digits.
    static ref PERCENT_ENCODED: Regex = Regex::new(r"%[0-9A-Fa-f]{2}").unwrap();

    // Patterns commonly seen in deceptive or obfuscated URLs: link
    // shorteners, embedded dotted quads, Cyrillic lookalikes, hyphen runs,
    // and long digit runs.
    static ref SUSPICIOUS_PATTERNS: [Regex; 5] = [
        Regex::new(r"(?i)bit\.ly|tinyurl|t\.co").unwrap(),
        Regex::new(r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}").unwrap(),
        Regex::new(r"(?i)[а-яё]").unwrap(),
        Regex::new(r"-{4,}").unwrap(),
        Regex::new(r"[0-9]{10,}").unwrap(),
    ];
}

/// Extracts the security heuristics group from a parsed URL.
///
/// All pattern checks run against the full serialized URL.
pub fn extract(url: &Url) -> AttributeGroup {
    let full = url.as_str();

    let is_secure = url.scheme() == "https";
    let has_www = url
        .host_str()
        .is_some_and(|host| host.starts_with("www."));
    let has_encoding = PERCENT_ENCODED.is_match(full);
    let has_suspicious = SUSPICIOUS_PATTERNS.iter().any(|p| p.is_match(full));
    let has_intl = full.chars().any(|c| !c.is_ascii());

    AttributeGroup {
        kind: GroupKind::Security,
        entries: vec![
            Attribute::new("HTTPS", if is_secure { "✅ Secure" } else { "❌ Insecure" }),
            Attribute::new("WWW Prefix", if has_www { "✅ Yes" } else { "❌ No" }),
            Attribute::new(
                "URL Encoding",
                if has_encoding { "⚠️ Present" } else { "✅ Clean" },
            ),
            Attribute::new(
                "Suspicious",
                if has_suspicious { "⚠️ Detected" } else { "✅ Clean" },
            ),
            Attribute::new(
                "Intl. Chars",
                if has_intl { "🌐 Present" } else { "✅ ASCII" },
            ),
            Attribute::new(
                "Standard Port",
                if has_standard_port(url) { "✅ Yes" } else { "⚠️ Custom" },
            ),
        ],
    }
}

/// True when the URL uses its scheme's conventional port (or none at all).
fn has_standard_port(url: &Url) -> bool {
    match url.scheme() {
        "https" => matches!(url.port(), None | Some(443)),
        "http" => matches!(url.port(), None | Some(80)),
        _ => false,
    }
}
