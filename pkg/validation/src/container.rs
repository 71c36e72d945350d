use pkg_constants::messages::CONTAINER_INVALID_ERROR;
use pkg_types::validation::Validation;
use regex::Regex;
use std::sync::LazyLock;

use crate::result::{reject, require_trimmed};

// [registry[:port]/]path[:tag][@digest], following the distribution reference grammar.
static IMAGE_REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^
        (?:
            [a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?
            (?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*
            (?::[0-9]+)?
            /
        )?
        [a-z0-9]+(?:(?:\.|__|_|-+)[a-z0-9]+)*
        (?:/[a-z0-9]+(?:(?:\.|__|_|-+)[a-z0-9]+)*)*
        (?::[A-Za-z0-9_][A-Za-z0-9_.-]{0,127})?
        (?:@[A-Za-z][A-Za-z0-9]*(?:[-_+.][A-Za-z][A-Za-z0-9]*)*:[0-9a-fA-F]{32,})?
        $",
    )
    .unwrap()
});

/// Validate a container image reference used as a VM disk source.
pub fn validate_container(value: Option<&str>) -> Validation {
    let value = require_trimmed(value)?;
    if IMAGE_REFERENCE_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(reject("container-reference", CONTAINER_INVALID_ERROR))
    }
}
