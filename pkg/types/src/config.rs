use serde::{Deserialize, Serialize};

use crate::field::FieldRule;

/// `formctl` configuration file (YAML).
///
/// Example `formctl.yaml`:
/// ```yaml
/// namespace: default
/// bmc-protocols: [ipmi, redfish]
/// rules:
///   - key: name
///     kind: dns1123
///   - key: bmc
///     kind: bmc-url
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormctlConfigFile {
    /// Namespace used by the name check when `--namespace` is not given.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Overrides the built-in BMC protocol allow-list.
    #[serde(default, alias = "bmc-protocols")]
    pub bmc_protocols: Option<Vec<String>>,
    /// Field rules applied by `formctl form`.
    #[serde(default)]
    pub rules: Vec<FieldRule>,
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> anyhow::Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}
