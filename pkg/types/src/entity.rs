use serde::{Deserialize, Serialize};

// --- Object metadata ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
}

// --- Entity kind ---

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntityKind {
    #[default]
    VirtualMachine,
    #[serde(alias = "VirtualMachineTemplate")]
    Template,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::VirtualMachine => write!(f, "VirtualMachine"),
            EntityKind::Template => write!(f, "Template"),
        }
    }
}

/// A virtual machine or a VM template already present in the cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VmLikeEntity {
    #[serde(default)]
    pub kind: EntityKind,
    pub metadata: ObjectMeta,
}

impl VmLikeEntity {
    pub fn new(kind: EntityKind, name: &str, namespace: Option<&str>) -> Self {
        Self {
            kind,
            metadata: ObjectMeta {
                name: name.to_string(),
                namespace: namespace.map(str::to_string),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.metadata.namespace.as_deref()
    }
}

/// Parse a list of entities from YAML or JSON text.
pub fn parse_entities(content: &str) -> anyhow::Result<Vec<VmLikeEntity>> {
    // YAML is a superset of JSON, one parser covers both.
    let entities: Vec<VmLikeEntity> = serde_yaml::from_str(content)?;
    Ok(entities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_yaml_entities() {
        let yaml = r#"
- kind: VirtualMachine
  metadata:
    name: vm1
    namespace: test-namespace
- kind: Template
  metadata:
    name: fedora
"#;
        let entities = parse_entities(yaml).unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name(), "vm1");
        assert_eq!(entities[0].namespace(), Some("test-namespace"));
        assert_eq!(entities[1].kind, EntityKind::Template);
        assert_eq!(entities[1].namespace(), None);
    }

    #[test]
    fn parses_json_entities_with_default_kind() {
        let json = r#"[{"metadata":{"name":"vm2","namespace":"ns"}}]"#;
        let entities = parse_entities(json).unwrap();
        assert_eq!(entities[0].kind, EntityKind::VirtualMachine);
    }
}
