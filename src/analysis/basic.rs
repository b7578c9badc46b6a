//! Basic info extraction: hostname, protocol, port, path, query, fragment.

use url::Url;

use crate::config::{HTTPS_DEFAULT_PORT, HTTP_DEFAULT_PORT};

use super::report::{Attribute, AttributeGroup, GroupKind};

/// Extracts the basic info group from a parsed URL.
///
/// Deterministic, no failure modes. The port falls back to the scheme
/// default (443 for https, 80 otherwise) when the URL carries no explicit
/// port; query params are counted as raw entries, so duplicate keys count
/// separately.
pub fn extract(url: &Url) -> AttributeGroup {
    let port = match url.port() {
        Some(port) => port.to_string(),
        None if url.scheme() == "https" => HTTPS_DEFAULT_PORT.to_string(),
        None => HTTP_DEFAULT_PORT.to_string(),
    };

    let path = if url.path() == "/" {
        "Root".to_string()
    } else {
        url.path().to_string()
    };

    let query_params = match url.query_pairs().count() {
        0 => "None".to_string(),
        n => n.to_string(),
    };

    let fragment = match url.fragment() {
        Some(f) if !f.is_empty() => f.to_string(),
        _ => "None".to_string(),
    };

    AttributeGroup {
        kind: GroupKind::Basic,
        entries: vec![
            Attribute::new("Website", url.host_str().unwrap_or_default()),
            Attribute::new("Protocol", url.scheme().to_uppercase()),
            Attribute::new("Port", port),
            Attribute::new("Path", path),
            Attribute::new("Query Params", query_params),
            Attribute::new("Fragment", fragment),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::extract;

    fn parse(s: &str) -> url::Url {
        url::Url::parse(s).unwrap()
    }

    fn value(url: &str, label: &str) -> String {
        let group = extract(&parse(url));
        group
            .entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.clone())
            .unwrap_or_else(|| panic!("missing label {label}"))
    }

    #[test]
    fn test_port_defaults_by_scheme() {
        assert_eq!(value("https://example.com", "Port"), "443");
        assert_eq!(value("http://example.com", "Port"), "80");
        assert_eq!(value("ftp://example.com", "Port"), "80");
    }

    #[test]
    fn test_port_explicit() {
        assert_eq!(value("https://example.com:8443", "Port"), "8443");
    }

    #[test]
    fn test_port_explicit_default_collapses() {
        // The parser drops a redundant :443, so the scheme fallback applies
        assert_eq!(value("https://example.com:443/", "Port"), "443");
    }

    #[test]
    fn test_path_root() {
        assert_eq!(value("https://example.com/", "Path"), "Root");
        assert_eq!(value("https://example.com", "Path"), "Root");
    }

    #[test]
    fn test_path_non_root() {
        assert_eq!(value("https://example.com/a/b", "Path"), "/a/b");
    }

    #[test]
    fn test_query_param_entry_count() {
        assert_eq!(value("https://example.com/?a=1&b=2", "Query Params"), "2");
        // Duplicate keys count separately (raw entry count)
        assert_eq!(
            value("https://example.com/?a=1&a=2&a=3", "Query Params"),
            "3"
        );
    }

    #[test]
    fn test_query_params_none() {
        assert_eq!(value("https://example.com/", "Query Params"), "None");
        // A bare "?" contributes no entries
        assert_eq!(value("https://example.com/?", "Query Params"), "None");
    }

    #[test]
    fn test_fragment() {
        assert_eq!(value("https://example.com/#section", "Fragment"), "section");
        assert_eq!(value("https://example.com/", "Fragment"), "None");
        // A bare "#" counts as absent
        assert_eq!(value("https://example.com/#", "Fragment"), "None");
    }

    #[test]
    fn test_protocol_uppercased() {
        assert_eq!(value("https://example.com", "Protocol"), "HTTPS");
        assert_eq!(value("ftp://example.com", "Protocol"), "FTP");
    }
}
