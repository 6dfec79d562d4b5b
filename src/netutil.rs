/*!
Address helpers for exaddr.

This module centralizes:
- IP literal parsing (IPv4 dotted-quad and IPv6 textual forms)
- The host check used as a second gate after hostname extraction
*/

use std::net::IpAddr;

use crate::domain_utils::is_valid_domain;

/// Parse an IPv4 or IPv6 literal using the standard textual notation.
pub fn parse_ip_literal(s: &str) -> Option<IpAddr> {
    s.parse::<IpAddr>().ok()
}

/// Return true if `host` is a valid IP literal or a valid domain name.
pub fn is_valid_host(host: &str) -> bool {
    parse_ip_literal(host).is_some() || is_valid_domain(host)
}
