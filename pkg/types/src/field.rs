use serde::{Deserialize, Serialize};

/// Single-value validators a form field can be bound to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    PositiveNumber,
    Dns1123,
    Url,
    VmwareUrl,
    Container,
    BmcUrl,
    Mac,
}

impl FieldKind {
    pub const ALL: &'static [FieldKind] = &[
        FieldKind::PositiveNumber,
        FieldKind::Dns1123,
        FieldKind::Url,
        FieldKind::VmwareUrl,
        FieldKind::Container,
        FieldKind::BmcUrl,
        FieldKind::Mac,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::PositiveNumber => "positive-number",
            FieldKind::Dns1123 => "dns1123",
            FieldKind::Url => "url",
            FieldKind::VmwareUrl => "vmware-url",
            FieldKind::Container => "container",
            FieldKind::BmcUrl => "bmc-url",
            FieldKind::Mac => "mac",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FieldKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        FieldKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown field kind '{}'", s))
    }
}

/// Binds a form key to the validator that checks it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldRule {
    pub key: String,
    pub kind: FieldKind,
}
