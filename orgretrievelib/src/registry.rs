//! Metadata type descriptors and the built-in registry.
//!
//! Every retrievable component carries a type. On the wire a type is either
//! a bare registry key (`"apexclass"`) or a full inline descriptor; this
//! module holds the descriptor shape and the built-in key lookup.

use serde::{Deserialize, Serialize};

use crate::error::RetrieveError;

/// Descriptor for a kind of metadata component.
///
/// `id` is the internal registry key; `name` is the human-readable label
/// shown in reports (e.g. `apexclass` vs `ApexClass`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataType {
    /// Internal registry key (lowercase)
    pub id: String,
    /// Human-readable display label
    pub name: String,
    /// File suffix for this type's source files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Directory that holds components of this type in a project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_name: Option<String>,
}

impl MetadataType {
    /// Create a descriptor with suffix and directory name.
    pub fn new(id: &str, name: &str, suffix: Option<&str>, directory_name: Option<&str>) -> Self {
        MetadataType {
            id: id.to_string(),
            name: name.to_string(),
            suffix: suffix.map(String::from),
            directory_name: directory_name.map(String::from),
        }
    }
}

/// Lookup table of known metadata types, keyed by registry id.
#[derive(Debug, Clone)]
pub struct Registry {
    types: Vec<MetadataType>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// Registry preloaded with the common metadata types.
    pub fn builtin() -> Self {
        let types = vec![
            MetadataType::new("apexclass", "ApexClass", Some("cls"), Some("classes")),
            MetadataType::new("apextrigger", "ApexTrigger", Some("trigger"), Some("triggers")),
            MetadataType::new("apexpage", "ApexPage", Some("page"), Some("pages")),
            MetadataType::new(
                "apexcomponent",
                "ApexComponent",
                Some("component"),
                Some("components"),
            ),
            MetadataType::new("customobject", "CustomObject", Some("object"), Some("objects")),
            MetadataType::new("layout", "Layout", Some("layout"), Some("layouts")),
            MetadataType::new(
                "staticresource",
                "StaticResource",
                Some("resource"),
                Some("staticresources"),
            ),
            MetadataType::new("flow", "Flow", Some("flow"), Some("flows")),
            MetadataType::new(
                "lightningcomponentbundle",
                "LightningComponentBundle",
                None,
                Some("lwc"),
            ),
            MetadataType::new("auradefinitionbundle", "AuraDefinitionBundle", None, Some("aura")),
        ];
        Registry { types }
    }

    /// Registry with no entries. Every key lookup misses.
    pub fn empty() -> Self {
        Registry { types: Vec::new() }
    }

    /// Look up a type by registry key, case-insensitively.
    pub fn get(&self, key: &str) -> Option<&MetadataType> {
        let key = key.to_lowercase();
        self.types.iter().find(|t| t.id == key)
    }

    /// Like [`Registry::get`], but an error on a miss.
    pub fn require(&self, key: &str) -> crate::Result<&MetadataType> {
        self.get(key)
            .ok_or_else(|| RetrieveError::UnknownType(key.to_string()))
    }

    /// Add a type to the registry, replacing any entry with the same id.
    pub fn register(&mut self, metadata_type: MetadataType) {
        self.types.retain(|t| t.id != metadata_type.id);
        self.types.push(metadata_type);
    }

    /// All registered types, in registration order.
    pub fn types(&self) -> &[MetadataType] {
        &self.types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let registry = Registry::builtin();
        let apex = registry.get("apexclass").unwrap();
        assert_eq!(apex.name, "ApexClass");
        assert_eq!(apex.suffix.as_deref(), Some("cls"));
        assert_eq!(apex.directory_name.as_deref(), Some("classes"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = Registry::builtin();
        assert_eq!(registry.get("ApexClass").unwrap().id, "apexclass");
        assert_eq!(registry.get("APEXTRIGGER").unwrap().name, "ApexTrigger");
    }

    #[test]
    fn test_unknown_key() {
        let registry = Registry::builtin();
        assert!(registry.get("nosuchtype").is_none());
        assert!(matches!(
            registry.require("nosuchtype"),
            Err(RetrieveError::UnknownType(_))
        ));
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = Registry::empty();
        registry.register(MetadataType::new("apexclass", "ApexClass", None, None));
        registry.register(MetadataType::new("apexclass", "ApexKlass", None, None));
        assert_eq!(registry.types().len(), 1);
        assert_eq!(registry.get("apexclass").unwrap().name, "ApexKlass");
    }

    #[test]
    fn test_serde_round_trip() {
        let apex = MetadataType::new("apexclass", "ApexClass", Some("cls"), Some("classes"));
        let json = serde_json::to_string(&apex).unwrap();
        assert!(json.contains("\"directoryName\":\"classes\""));
        let back: MetadataType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, apex);
    }
}
