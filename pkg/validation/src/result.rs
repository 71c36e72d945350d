use pkg_constants::messages::{EMPTY_ERROR, END_WHITESPACE_ERROR, START_WHITESPACE_ERROR};
use pkg_types::validation::{ValidationObject, ValidationType};
use tracing::debug;

/// Wrap a message into an error-level validation result.
pub fn get_validation_object(message: impl Into<String>) -> ValidationObject {
    get_validation_object_with_type(message, ValidationType::Error)
}

pub fn get_validation_object_with_type(
    message: impl Into<String>,
    kind: ValidationType,
) -> ValidationObject {
    ValidationObject {
        message: message.into(),
        kind,
    }
}

/// Build the failure for `rule` and log which rule rejected the value.
pub(crate) fn reject(rule: &'static str, message: impl Into<String>) -> ValidationObject {
    let obj = get_validation_object(message);
    debug!(rule, reason = %obj.message, "value rejected");
    obj
}

/// Shared prelude of the free-text validators: the value must be present and
/// must not start or end with whitespace.
pub(crate) fn require_trimmed(value: Option<&str>) -> Result<&str, ValidationObject> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return Err(reject("empty", EMPTY_ERROR)),
    };
    if value.starts_with(char::is_whitespace) {
        return Err(reject("start-whitespace", START_WHITESPACE_ERROR));
    }
    if value.ends_with(char::is_whitespace) {
        return Err(reject("end-whitespace", END_WHITESPACE_ERROR));
    }
    Ok(value)
}
