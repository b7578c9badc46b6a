//! Configuration constants.

/// Port displayed for `https` URLs that carry no explicit port.
pub const HTTPS_DEFAULT_PORT: u16 = 443;

/// Port displayed for URLs of any other scheme that carry no explicit port.
pub const HTTP_DEFAULT_PORT: u16 = 80;

/// Hostnames that always count as the local machine.
pub const LOCAL_HOSTNAMES: &[&str] = &["localhost", "127.0.0.1"];

/// Hostname suffix (mDNS) that counts as the local network.
pub const LOCAL_HOST_SUFFIX: &str = ".local";
