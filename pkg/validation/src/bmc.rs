use pkg_constants::bmc::{BMC_PROTOCOLS, PROTOCOL_SEPARATOR};
use pkg_constants::limits::{BMC_PORT_MAX_DIGITS, HOSTNAME_LABEL_MAX_LENGTH, HOSTNAME_MAX_LENGTH};
use pkg_constants::messages::{BMC_PORT_ERROR, BMC_PROTOCOL_ERROR, URL_INVALID_ERROR};
use pkg_types::validation::Validation;
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::debug;

use crate::result::{reject, require_trimmed};

/// Validate a BMC address against the built-in protocol allow-list.
pub fn validate_bmc_url(value: Option<&str>) -> Validation {
    validate_bmc_url_with_protocols(value, BMC_PROTOCOLS)
}

/// Validate a BMC address of the form `[protocol://]host[:port][/path]`.
///
/// The protocol is optional; when present it must appear in `protocols`
/// (compared case-insensitively).
pub fn validate_bmc_url_with_protocols<S: AsRef<str>>(
    value: Option<&str>,
    protocols: &[S],
) -> Validation {
    let value = require_trimmed(value)?;

    let address = match value.split_once(PROTOCOL_SEPARATOR) {
        Some((protocol, rest)) => {
            if !protocols
                .iter()
                .any(|p| p.as_ref().eq_ignore_ascii_case(protocol))
            {
                debug!(protocol, "unsupported BMC protocol");
                return Err(reject("bmc-protocol", BMC_PROTOCOL_ERROR));
            }
            rest
        }
        None => value,
    };

    let authority = match address.split_once('/') {
        Some((authority, _path)) => authority,
        None => address,
    };
    let (host, port) = split_host_port(authority);

    if let Some(port) = port {
        if !is_valid_port(port) {
            return Err(reject("bmc-port", BMC_PORT_ERROR));
        }
    }
    if !is_valid_host(host) {
        return Err(reject("bmc-host", URL_INVALID_ERROR));
    }
    Ok(())
}

/// Split `host[:port]`. A bracketed IPv6 host keeps its brackets; an
/// unbracketed authority with several colons is a bare IPv6 host.
fn split_host_port(authority: &str) -> (&str, Option<&str>) {
    if authority.starts_with('[') {
        if let Some(end) = authority.find(']') {
            let (host, tail) = authority.split_at(end + 1);
            return match tail.strip_prefix(':') {
                Some(port) => (host, Some(port)),
                None if tail.is_empty() => (host, None),
                None => (authority, None),
            };
        }
        return (authority, None);
    }
    match authority.matches(':').count() {
        1 => match authority.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        },
        _ => (authority, None),
    }
}

fn is_valid_port(port: &str) -> bool {
    !port.is_empty()
        && port.len() <= BMC_PORT_MAX_DIGITS
        && port.bytes().all(|b| b.is_ascii_digit())
        && port.parse::<u16>().is_ok()
}

fn is_valid_host(host: &str) -> bool {
    if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        return inner.parse::<Ipv6Addr>().is_ok();
    }
    host.parse::<Ipv4Addr>().is_ok() || host.parse::<Ipv6Addr>().is_ok() || is_valid_hostname(host)
}

/// RFC-1123 hostname. An all-numeric final label is left to the IPv4 parser.
fn is_valid_hostname(host: &str) -> bool {
    if host.is_empty() || host.len() > HOSTNAME_MAX_LENGTH {
        return false;
    }
    let labels: Vec<&str> = host.split('.').collect();
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= HOSTNAME_LABEL_MAX_LENGTH
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    });
    let tld_numeric = labels
        .last()
        .is_some_and(|tld| tld.bytes().all(|b| b.is_ascii_digit()));
    labels_ok && !tld_numeric
}
