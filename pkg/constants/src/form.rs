//! Keys used by the VM creation form.

/// Form key holding the target namespace.
pub const NAMESPACE_KEY: &str = "namespace";

/// Scheme assumed for a VMware endpoint typed without one.
pub const VMWARE_DEFAULT_SCHEME: &str = "https";
