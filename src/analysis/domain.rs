//! Domain breakdown: subdomain, main domain, TLD, and locality.
//!
//! The split is deliberately naive dot-splitting without a Public Suffix
//! List: the last label of a hostname with more than two parts is treated as
//! the TLD, regardless of multi-part suffixes like `co.uk`.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::config::{LOCAL_HOSTNAMES, LOCAL_HOST_SUFFIX};

use super::report::{Attribute, AttributeGroup, GroupKind};

lazy_static! {
    // Four dot-separated digit groups. Does not check the 0-255 range, so
    // 999.999.999.999 still classifies as an IP literal.
    static ref IPV4_LITERAL: Regex = Regex::new(r"^\d+\.\d+\.\d+\.\d+$").unwrap();
}

/// Extracts the domain breakdown group from a parsed URL.
///
/// Hostnames with more than two dot-separated parts split into
/// subdomain / main domain / TLD; shorter hostnames are reported whole with
/// an `Unknown` TLD (`N/A` for IP literals).
pub fn extract(url: &Url) -> AttributeGroup {
    let hostname = url.host_str().unwrap_or_default();
    let parts: Vec<&str> = hostname.split('.').collect();
    let is_ip = IPV4_LITERAL.is_match(hostname);

    let mut subdomain = String::new();
    let mut main_domain = hostname.to_string();
    let mut tld = "";

    if !is_ip && parts.len() > 2 {
        tld = parts[parts.len() - 1];
        main_domain = parts[parts.len() - 2].to_string();
        subdomain = parts[..parts.len() - 2].join(".");
    }

    let tld_display = if !tld.is_empty() {
        tld.to_string()
    } else if is_ip {
        "N/A".to_string()
    } else {
        "Unknown".to_string()
    };

    let domain_type = if is_ip { "IP Address" } else { "Domain Name" };

    let subdomain_display = if subdomain.is_empty() {
        "None".to_string()
    } else {
        subdomain
    };

    AttributeGroup {
        kind: GroupKind::Domain,
        entries: vec![
            Attribute::new("Domain Type", domain_type),
            Attribute::new("Main Domain", main_domain),
            Attribute::new("Subdomain", subdomain_display),
            Attribute::new("TLD", tld_display),
            Attribute::new("Domain Parts", format!("{} parts", parts.len())),
            Attribute::new("Is Local", if is_local(hostname) { "Yes" } else { "No" }),
        ],
    }
}

/// Whether a hostname refers to the local machine or local network.
fn is_local(hostname: &str) -> bool {
    LOCAL_HOSTNAMES.contains(&hostname) || hostname.ends_with(LOCAL_HOST_SUFFIX)
}
