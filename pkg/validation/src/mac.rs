use pkg_constants::limits::{MAC_OCTET_GROUP_COUNTS, MAC_QUARTET_GROUP_COUNTS};
use pkg_constants::messages::{EMPTY_ERROR, MAC_INVALID_ERROR};
use pkg_types::validation::Validation;
use regex::Regex;
use std::sync::LazyLock;

use crate::result::reject;

// One alternative per separator and group count; a single separator must be used throughout.
static MAC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let mut alternatives = Vec::new();
    for &count in MAC_OCTET_GROUP_COUNTS {
        for sep in [":", "-"] {
            alternatives.push(format!("[0-9a-f]{{2}}(?:{}[0-9a-f]{{2}}){{{}}}", sep, count - 1));
        }
    }
    for &count in MAC_QUARTET_GROUP_COUNTS {
        alternatives.push(format!(r"[0-9a-f]{{4}}(?:\.[0-9a-f]{{4}}){{{}}}", count - 1));
    }
    Regex::new(&format!("(?i)^(?:{})$", alternatives.join("|"))).unwrap()
});

/// True for a hardware address in colon, dash (6, 8 or 20 octets) or period
/// (3, 4 or 10 quartets) notation.
pub fn is_valid_mac(value: &str) -> bool {
    MAC_REGEX.is_match(value)
}

/// Form-field wrapper around [`is_valid_mac`].
pub fn validate_mac(value: Option<&str>) -> Validation {
    match value {
        None | Some("") => Err(reject("mac-empty", EMPTY_ERROR)),
        Some(v) if is_valid_mac(v) => Ok(()),
        Some(_) => Err(reject("mac-syntax", MAC_INVALID_ERROR)),
    }
}
