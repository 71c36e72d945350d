use pkg_constants::bmc::BMC_PROTOCOLS;
use pkg_constants::messages::{EMPTY_ERROR, POSITIVE_NUMBER_ERROR};
use pkg_types::field::{FieldKind, FieldRule};
use pkg_types::settings::VmSettings;
use pkg_types::validation::Validation;
use tracing::debug;

use crate::result::reject;
use crate::{
    bmc, is_positive_number, validate_container, validate_dns1123_subdomain_value, validate_mac,
    validate_url, validate_vmware_url,
};

/// Dispatches a [`FieldKind`] to its validator, carrying the configurable
/// parts (the BMC protocol allow-list).
#[derive(Debug, Clone)]
pub struct FieldValidators {
    bmc_protocols: Vec<String>,
}

impl Default for FieldValidators {
    fn default() -> Self {
        Self {
            bmc_protocols: BMC_PROTOCOLS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl FieldValidators {
    pub fn with_bmc_protocols(bmc_protocols: Vec<String>) -> Self {
        Self { bmc_protocols }
    }

    pub fn validate(&self, kind: FieldKind, value: Option<&str>) -> Validation {
        match kind {
            FieldKind::PositiveNumber => match value {
                None | Some("") => Err(reject("positive-number-empty", EMPTY_ERROR)),
                v if is_positive_number(v) => Ok(()),
                _ => Err(reject("positive-number", POSITIVE_NUMBER_ERROR)),
            },
            FieldKind::Dns1123 => validate_dns1123_subdomain_value(value),
            FieldKind::Url => validate_url(value),
            FieldKind::VmwareUrl => validate_vmware_url(value),
            FieldKind::Container => validate_container(value),
            FieldKind::BmcUrl => bmc::validate_bmc_url_with_protocols(value, &self.bmc_protocols),
            FieldKind::Mac => validate_mac(value),
        }
    }

    /// Run every rule against `settings`, one result per rule in rule order.
    /// Several rules may target the same key.
    pub fn validate_form(
        &self,
        settings: &VmSettings,
        rules: &[FieldRule],
    ) -> Vec<(String, Validation)> {
        rules
            .iter()
            .map(|rule| {
                let result = self.validate(rule.kind, settings.value(&rule.key));
                if result.is_err() {
                    debug!(key = %rule.key, kind = %rule.kind, "form field invalid");
                }
                (rule.key.clone(), result)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::get_validation_object;
    use pkg_constants::messages::{BMC_PROTOCOL_ERROR, MAC_INVALID_ERROR, URL_INVALID_ERROR};

    #[test]
    fn positive_number_field() {
        let v = FieldValidators::default();
        assert!(v.validate(FieldKind::PositiveNumber, Some("4")).is_ok());
        assert_eq!(
            v.validate(FieldKind::PositiveNumber, Some("0")),
            Err(get_validation_object(POSITIVE_NUMBER_ERROR))
        );
        assert_eq!(
            v.validate(FieldKind::PositiveNumber, None),
            Err(get_validation_object(EMPTY_ERROR))
        );
    }

    #[test]
    fn dispatches_each_kind() {
        let v = FieldValidators::default();
        assert!(v.validate(FieldKind::Dns1123, Some("vm-1")).is_ok());
        assert!(v.validate(FieldKind::Url, Some("http://hello.com")).is_ok());
        assert!(
            v.validate(FieldKind::VmwareUrl, Some("vcenter.local")).is_ok()
        );
        assert!(
            v.validate(FieldKind::Container, Some("kubevirt/cirros")).is_ok()
        );
        assert!(
            v.validate(FieldKind::BmcUrl, Some("ipmi://10.0.0.5")).is_ok()
        );
        assert!(v.validate(FieldKind::Mac, Some("0123.4567.89ab")).is_ok());
    }

    #[test]
    fn configured_bmc_protocols() {
        let v = FieldValidators::with_bmc_protocols(vec!["redfish".to_string()]);
        assert!(v.validate(FieldKind::BmcUrl, Some("redfish://bmc")).is_ok());
        assert_eq!(
            v.validate(FieldKind::BmcUrl, Some("ipmi://bmc")),
            Err(get_validation_object(BMC_PROTOCOL_ERROR))
        );
    }

    fn rule(key: &str, kind: FieldKind) -> FieldRule {
        FieldRule {
            key: key.to_string(),
            kind,
        }
    }

    #[test]
    fn form_results_in_rule_order() {
        let settings = VmSettings::new()
            .with_value("name", "vm1")
            .with_value("mac", "01:23")
            .with_value("cpus", "2");
        let rules = vec![
            rule("mac", FieldKind::Mac),
            rule("name", FieldKind::Dns1123),
            rule("url", FieldKind::Url),
            rule("cpus", FieldKind::PositiveNumber),
        ];
        let results = FieldValidators::default().validate_form(&settings, &rules);
        assert_eq!(
            results,
            vec![
                ("mac".to_string(), Err(get_validation_object(MAC_INVALID_ERROR))),
                ("name".to_string(), Ok(())),
                ("url".to_string(), Err(get_validation_object(EMPTY_ERROR))),
                ("cpus".to_string(), Ok(())),
            ]
        );
    }

    #[test]
    fn rules_sharing_a_key_are_reported_separately() {
        let settings = VmSettings::new().with_value("disk", "01:23:45:67:89:ab");
        let rules = vec![rule("disk", FieldKind::Mac), rule("disk", FieldKind::Url)];
        let results = FieldValidators::default().validate_form(&settings, &rules);
        assert_eq!(
            results,
            vec![
                ("disk".to_string(), Ok(())),
                ("disk".to_string(), Err(get_validation_object(URL_INVALID_ERROR))),
            ]
        );
    }
}
