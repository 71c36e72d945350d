use pkg_constants::form::NAMESPACE_KEY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One field of the VM creation form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormField {
    #[serde(default)]
    pub value: Option<String>,
}

/// Form state keyed by field key (`name`, `namespace`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct VmSettings(pub BTreeMap<String, FormField>);

impl VmSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a field value.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.set_value(key, value);
        self
    }

    pub fn set_value(&mut self, key: &str, value: &str) {
        self.0.entry(key.to_string()).or_default().value = Some(value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|f| f.value.as_deref())
    }

    pub fn namespace(&self) -> Option<&str> {
        self.value(NAMESPACE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_namespace_and_values() {
        let settings = VmSettings::new()
            .with_value("name", "vm3")
            .with_value(NAMESPACE_KEY, "test-namespace");
        assert_eq!(settings.value("name"), Some("vm3"));
        assert_eq!(settings.namespace(), Some("test-namespace"));
        assert_eq!(settings.value("missing"), None);
    }

    #[test]
    fn deserializes_form_document() {
        let yaml = r#"
name:
  value: vm1
namespace:
  value: default
memory: {}
"#;
        let settings: VmSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.value("name"), Some("vm1"));
        assert_eq!(settings.value("memory"), None);
        assert!(settings.0.contains_key("memory"));
    }
}
