//! Form-field validators for VM-like entities.
//!
//! Every validator returns [`Validation`]: `Ok(())` for a valid value, or a
//! [`ValidationObject`] carrying the user-facing message.

pub mod bmc;
pub mod container;
pub mod dns;
pub mod entity;
pub mod field;
pub mod mac;
pub mod number;
pub mod result;
pub mod url;

pub use bmc::{validate_bmc_url, validate_bmc_url_with_protocols};
pub use container::validate_container;
pub use dns::validate_dns1123_subdomain_value;
pub use entity::validate_vm_like_entity_name;
pub use field::FieldValidators;
pub use mac::{is_valid_mac, validate_mac};
pub use number::is_positive_number;
pub use result::{get_validation_object, get_validation_object_with_type};
pub use crate::url::{validate_url, validate_vmware_url};

pub use pkg_types::validation::{Validation, ValidationObject, ValidationType};
