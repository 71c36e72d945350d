use regex::Regex;
use std::sync::LazyLock;

static POSITIVE_INTEGER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]*$").unwrap());

/// True when `value` is a strictly positive integer written without sign,
/// leading zeros, separators or surrounding whitespace.
pub fn is_positive_number(value: Option<&str>) -> bool {
    value.is_some_and(|v| POSITIVE_INTEGER_REGEX.is_match(v))
}
