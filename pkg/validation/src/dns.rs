use pkg_constants::limits::DNS1123_MAX_LENGTH;
use pkg_constants::messages::{
    DNS1123_CONTAINS_ERROR, DNS1123_END_ERROR, DNS1123_START_ERROR, DNS1123_TOO_LONG_ERROR,
    DNS1123_UNDERSCORE_NAME, DNS1123_UPPERCASE_ERROR, EMPTY_ERROR,
};
use pkg_types::validation::Validation;
use regex::Regex;
use std::sync::LazyLock;

use crate::result::reject;

static DNS1123_SUBDOMAIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").unwrap());

/// Validate a Kubernetes-style DNS-1123 value.
/// Rules: lowercase `[a-z0-9-]`, max 253 chars, must start and end alphanumeric.
///
/// Every violated rule contributes one sentence to the message, so the user
/// sees all problems at once.
pub fn validate_dns1123_subdomain_value(value: Option<&str>) -> Validation {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return Err(reject("dns1123-empty", sentence(&[EMPTY_ERROR]))),
    };
    if value.chars().count() > DNS1123_MAX_LENGTH {
        return Err(reject("dns1123-length", sentence(&[DNS1123_TOO_LONG_ERROR])));
    }
    if DNS1123_SUBDOMAIN_REGEX.is_match(value) {
        return Ok(());
    }

    let mut parts: Vec<String> = Vec::new();
    if !value.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        parts.push(DNS1123_START_ERROR.to_string());
    }
    if !value.ends_with(|c: char| c.is_ascii_alphanumeric()) {
        parts.push(DNS1123_END_ERROR.to_string());
    }
    if value.chars().any(|c| c.is_ascii_uppercase()) {
        parts.push(DNS1123_UPPERCASE_ERROR.to_string());
    }

    let forbidden = forbidden_characters(value);
    if !forbidden.is_empty() {
        let names: Vec<String> = forbidden
            .iter()
            .map(|&c| match c {
                '_' => DNS1123_UNDERSCORE_NAME.to_string(),
                other => format!("'{}'", other),
            })
            .collect();
        parts.push(format!("{} {}", names.join(", "), DNS1123_CONTAINS_ERROR));
    }

    let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
    Err(reject("dns1123-syntax", sentence(&parts)))
}

/// Distinct characters outside `[a-zA-Z0-9-]`, in order of first appearance.
fn forbidden_characters(value: &str) -> Vec<char> {
    let mut seen = Vec::new();
    for c in value.chars() {
        if !(c.is_ascii_alphanumeric() || c == '-') && !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen
}

fn sentence(parts: &[&str]) -> String {
    format!("{}.", parts.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::get_validation_object;

    const START: &str = DNS1123_START_ERROR;
    const END: &str = DNS1123_END_ERROR;

    fn message(value: &str) -> String {
        validate_dns1123_subdomain_value(Some(value))
            .unwrap_err()
            .message
    }

    #[test]
    fn valid_values() {
        assert!(validate_dns1123_subdomain_value(Some("nginx")).is_ok());
        assert!(validate_dns1123_subdomain_value(Some("my-app")).is_ok());
        assert!(validate_dns1123_subdomain_value(Some("1abc")).is_ok());
        assert!(validate_dns1123_subdomain_value(Some("a")).is_ok());
        assert!(validate_dns1123_subdomain_value(Some("a--b")).is_ok());
        assert!(
            validate_dns1123_subdomain_value(Some(&"a".repeat(253))).is_ok()
        );
    }

    #[test]
    fn empty_and_too_long() {
        let empty = get_validation_object("Can not be empty.");
        assert_eq!(validate_dns1123_subdomain_value(None), Err(empty.clone()));
        assert_eq!(validate_dns1123_subdomain_value(Some("")), Err(empty));
        assert_eq!(
            message(&"a".repeat(254)),
            "cannot be longer than 253 characters."
        );
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 253 two-byte chars: within the limit, rejected for the chars themselves.
        let msg = message(&"é".repeat(253));
        assert_eq!(
            msg,
            format!("{START}. {END}. 'é' characters are not allowed.")
        );
    }

    #[test]
    fn combines_start_end_and_contains() {
        assert_eq!(
            message("_abc_"),
            format!("{START}. {END}. Underscore characters are not allowed.")
        );
        assert_eq!(message("-a-"), format!("{START}. {END}."));
    }

    #[test]
    fn lists_distinct_forbidden_characters_in_order() {
        assert_eq!(message("a/b*c/d"), "'/', '*' characters are not allowed.");
        assert_eq!(
            message("a_b.c"),
            "Underscore, '.' characters are not allowed."
        );
        assert_eq!(message("a b"), "' ' characters are not allowed.");
    }

    #[test]
    fn uppercase_is_reported_before_forbidden_characters() {
        assert_eq!(message("Aabc"), "Uppercase characters are not allowed.");
        assert_eq!(
            message("aB_c"),
            "Uppercase characters are not allowed. Underscore characters are not allowed."
        );
    }
}
