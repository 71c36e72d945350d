//! Length and shape limits.

/// Maximum length of a DNS-1123 subdomain value.
pub const DNS1123_MAX_LENGTH: usize = 253;

/// Maximum length of a single hostname label.
pub const HOSTNAME_LABEL_MAX_LENGTH: usize = 63;

/// Maximum length of a full hostname.
pub const HOSTNAME_MAX_LENGTH: usize = 253;

/// Accepted group counts for colon/dash separated MAC addresses (two hex digits per group).
pub const MAC_OCTET_GROUP_COUNTS: &[usize] = &[6, 8, 20];

/// Accepted group counts for period separated MAC addresses (four hex digits per group).
pub const MAC_QUARTET_GROUP_COUNTS: &[usize] = &[3, 4, 10];

/// Maximum number of digits in a BMC port.
pub const BMC_PORT_MAX_DIGITS: usize = 5;
