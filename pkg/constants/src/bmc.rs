//! Baseboard management controller constants.

/// Separator between a BMC protocol and its address.
pub const PROTOCOL_SEPARATOR: &str = "://";

/// Protocols accepted in a BMC address when no override is configured.
pub const BMC_PROTOCOLS: &[&str] = &[
    "ipmi",
    "idrac",
    "idrac+http",
    "idrac+https",
    "idrac-redfish",
    "irmc",
    "redfish",
    "redfish+http",
    "redfish+https",
    "ilo4",
    "ilo5-redfish",
    "libvirt",
];
