use pkg_constants::form::VMWARE_DEFAULT_SCHEME;
use pkg_constants::messages::URL_INVALID_ERROR;
use pkg_types::validation::Validation;
use url::Url;

use crate::result::{reject, require_trimmed};

/// Validate an absolute URL, e.g. the source of a disk image.
pub fn validate_url(value: Option<&str>) -> Validation {
    let value = require_trimmed(value)?;
    check_url(value)
}

/// Validate a VMware vCenter endpoint. A bare `host[:port]` is accepted and
/// treated as `https`.
pub fn validate_vmware_url(value: Option<&str>) -> Validation {
    let value = require_trimmed(value)?;
    if value.contains("://") {
        check_url(value)
    } else {
        check_url(&format!("{}://{}", VMWARE_DEFAULT_SCHEME, value))
    }
}

fn check_url(value: &str) -> Validation {
    match Url::parse(value) {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::trace!(error = %e, "url parse failed");
            Err(reject("url-syntax", URL_INVALID_ERROR))
        }
    }
}
