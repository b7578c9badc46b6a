//! URL component extraction: serialized form, origin, and path structure.

use url::Url;

use super::report::{Attribute, AttributeGroup, GroupKind};

/// Extracts the components group from a parsed URL.
pub fn extract(url: &Url) -> AttributeGroup {
    let full = url.as_str();

    let depth = url.path().split('/').filter(|s| !s.is_empty()).count();

    let mut relative = url.path().to_string();
    if let Some(query) = url.query().filter(|q| !q.is_empty()) {
        relative.push('?');
        relative.push_str(query);
    }
    if let Some(fragment) = url.fragment().filter(|f| !f.is_empty()) {
        relative.push('#');
        relative.push_str(fragment);
    }
    if relative.is_empty() {
        // The path of a parsed http/https/ftp URL is never empty, so this
        // branch is unreachable in practice.
        relative.push('/');
    }

    AttributeGroup {
        kind: GroupKind::Components,
        entries: vec![
            Attribute::new("Full URL", full),
            Attribute::new("Origin", url.origin().ascii_serialization()),
            Attribute::new("Hostname", url.host_str().unwrap_or_default()),
            Attribute::new("Path Depth", format!("{depth} levels")),
            Attribute::new("URL Length", format!("{} chars", full.chars().count())),
            Attribute::new("Relative Path", relative),
        ],
    }
}
