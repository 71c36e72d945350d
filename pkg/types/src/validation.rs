use serde::{Deserialize, Serialize};

/// Severity of a validation result.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ValidationType {
    #[default]
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for ValidationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationType::Error => write!(f, "error"),
            ValidationType::Warning => write!(f, "warning"),
            ValidationType::Info => write!(f, "info"),
        }
    }
}

/// Uniform result shape handed back to the form for a failed field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationObject {
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: ValidationType,
}

/// `Ok(())` means the value is valid.
pub type Validation = Result<(), ValidationObject>;
