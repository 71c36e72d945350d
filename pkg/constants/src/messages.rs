//! User-facing validation messages.
//!
//! DNS-1123 fragments are composed into sentences by the validator, so they
//! carry no trailing period.

/// Missing or empty value.
pub const EMPTY_ERROR: &str = "Can not be empty";

pub const START_WHITESPACE_ERROR: &str = "Can not start with whitespace characters";
pub const END_WHITESPACE_ERROR: &str = "Can not end with whitespace characters";

pub const URL_INVALID_ERROR: &str = "URL has to be valid";
pub const CONTAINER_INVALID_ERROR: &str = "Container image has to be a valid image reference";

pub const DNS1123_START_ERROR: &str = "has to start with alphanumeric character";
pub const DNS1123_END_ERROR: &str = "has to end with alphanumeric character";
pub const DNS1123_TOO_LONG_ERROR: &str = "cannot be longer than 253 characters";
pub const DNS1123_UPPERCASE_ERROR: &str = "Uppercase characters are not allowed";
/// Suffix appended to the list of forbidden characters.
pub const DNS1123_CONTAINS_ERROR: &str = "characters are not allowed";
/// How `_` is named in the forbidden character list.
pub const DNS1123_UNDERSCORE_NAME: &str = "Underscore";

pub const BMC_PROTOCOL_ERROR: &str =
    "Invalid protocol. Supported protocols are ipmi, idrac, irmc, redfish, ilo and libvirt";
pub const BMC_PORT_ERROR: &str = "Port has to be a number between 0 and 65535";

pub const MAC_INVALID_ERROR: &str = "Invalid MAC address format";
pub const POSITIVE_NUMBER_ERROR: &str = "Has to be a positive number";

pub const VIRTUAL_MACHINE_EXISTS: &str = "Virtual Machine with this name already exists";
pub const TEMPLATE_EXISTS: &str = "Template with this name already exists";
