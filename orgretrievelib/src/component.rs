//! Source components and their file path enumeration.
//!
//! A retrieved component is backed by one or more project files: an optional
//! content path (a single file, or a bundle directory listed in the virtual
//! tree) and the metadata XML descriptor. `file_paths` yields them in that
//! order, which is the row order of the success table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::registry::{MetadataType, Registry};

/// A metadata type on the wire: either a bare registry key or an inline
/// descriptor object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeRef {
    /// Registry key, e.g. `"apexclass"`
    Key(String),
    /// Full descriptor carried inline
    Inline(MetadataType),
}

impl TypeRef {
    /// Resolve against a registry. Inline descriptors always resolve.
    pub fn resolve<'a>(&'a self, registry: &'a Registry) -> Option<&'a MetadataType> {
        match self {
            TypeRef::Key(key) => registry.get(key),
            TypeRef::Inline(metadata_type) => Some(metadata_type),
        }
    }

    /// Display label for reports. Falls back to the raw key when the
    /// registry has no entry for it.
    pub fn display_name(&self, registry: &Registry) -> String {
        match self.resolve(registry) {
            Some(metadata_type) => metadata_type.name.clone(),
            None => match self {
                TypeRef::Key(key) => key.clone(),
                TypeRef::Inline(metadata_type) => metadata_type.name.clone(),
            },
        }
    }
}

/// A directory entry in a component's virtual file tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualDirectory {
    /// Project-relative directory path
    pub dir_path: String,
    /// File names directly under `dir_path`
    pub children: Vec<String>,
}

/// A fully resolved component with its backing files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceComponent {
    /// Component name, e.g. `MyTestClass`
    pub full_name: String,
    /// The component's metadata type
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    /// Content path: a source file, or a bundle directory listed in `tree`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Metadata XML descriptor path
    pub xml: String,
    /// Virtual file tree backing `content` when it names a directory
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tree: Vec<VirtualDirectory>,
}

impl SourceComponent {
    /// Build a component over a virtual file tree.
    pub fn virtual_component(
        full_name: &str,
        type_ref: TypeRef,
        content: Option<&str>,
        xml: &str,
        tree: Vec<VirtualDirectory>,
    ) -> Self {
        SourceComponent {
            full_name: full_name.to_string(),
            type_ref,
            content: content.map(String::from),
            xml: xml.to_string(),
            tree,
        }
    }

    /// Content file paths, in tree order.
    ///
    /// When `content` names a directory in the virtual tree, its children
    /// joined with the platform separator; otherwise the content path
    /// itself. Empty when the component has no content.
    pub fn walk_content(&self) -> Vec<String> {
        let Some(content) = &self.content else {
            return Vec::new();
        };
        for dir in &self.tree {
            if dir.dir_path == *content {
                return dir
                    .children
                    .iter()
                    .map(|child| {
                        Path::new(&dir.dir_path)
                            .join(child)
                            .to_string_lossy()
                            .into_owned()
                    })
                    .collect();
            }
        }
        vec![content.clone()]
    }

    /// All project-relative paths for this component: content first, then
    /// the metadata XML descriptor. Never empty.
    pub fn file_paths(&self) -> Vec<String> {
        let mut paths = self.walk_content();
        paths.push(self.xml.clone());
        paths
    }
}

/// Possibly-partial component identity reported on failures, where a full
/// component could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRef {
    /// Component name
    pub full_name: String,
    /// The component's metadata type
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apex_type() -> TypeRef {
        TypeRef::Key("apexclass".to_string())
    }

    #[test]
    fn test_file_paths_content_then_xml() {
        let component = SourceComponent::virtual_component(
            "MyTestClass",
            apex_type(),
            Some("classes/MyTestClass.cls"),
            "classes/MyTestClass.cls-meta.xml",
            vec![VirtualDirectory {
                dir_path: "classes".to_string(),
                children: vec![
                    "MyTestClass.cls".to_string(),
                    "MyTestClass.cls-meta.xml".to_string(),
                ],
            }],
        );
        assert_eq!(
            component.file_paths(),
            vec![
                "classes/MyTestClass.cls".to_string(),
                "classes/MyTestClass.cls-meta.xml".to_string(),
            ]
        );
    }

    #[test]
    fn test_walk_content_expands_bundle_directory() {
        let component = SourceComponent::virtual_component(
            "myCmp",
            TypeRef::Key("lightningcomponentbundle".to_string()),
            Some("lwc/myCmp"),
            "lwc/myCmp/myCmp.js-meta.xml",
            vec![VirtualDirectory {
                dir_path: "lwc/myCmp".to_string(),
                children: vec!["myCmp.js".to_string(), "myCmp.html".to_string()],
            }],
        );
        let expected: Vec<String> = ["myCmp.js", "myCmp.html"]
            .iter()
            .map(|child| {
                Path::new("lwc/myCmp")
                    .join(child)
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(component.walk_content(), expected);
        assert_eq!(component.file_paths().len(), 3);
    }

    #[test]
    fn test_walk_content_without_content() {
        let component = SourceComponent::virtual_component(
            "Account",
            TypeRef::Key("customobject".to_string()),
            None,
            "objects/Account.object-meta.xml",
            Vec::new(),
        );
        assert!(component.walk_content().is_empty());
        assert_eq!(
            component.file_paths(),
            vec!["objects/Account.object-meta.xml".to_string()]
        );
    }

    #[test]
    fn test_type_ref_resolves_key_and_inline() {
        let registry = Registry::builtin();
        let key = TypeRef::Key("ApexClass".to_string());
        assert_eq!(key.resolve(&registry).unwrap().name, "ApexClass");

        let inline = TypeRef::Inline(MetadataType::new("custom", "CustomThing", None, None));
        assert_eq!(inline.resolve(&registry).unwrap().name, "CustomThing");
    }

    #[test]
    fn test_display_name_falls_back_to_raw_key() {
        let registry = Registry::empty();
        let key = TypeRef::Key("apexclass".to_string());
        assert_eq!(key.display_name(&registry), "apexclass");
    }

    #[test]
    fn test_component_deserializes_from_wire_shape() {
        let component: SourceComponent = serde_json::from_value(serde_json::json!({
            "fullName": "MyTestClass",
            "type": "apexclass",
            "content": "classes/MyTestClass.cls",
            "xml": "classes/MyTestClass.cls-meta.xml"
        }))
        .unwrap();
        assert_eq!(component.full_name, "MyTestClass");
        assert_eq!(component.type_ref, TypeRef::Key("apexclass".to_string()));
        assert!(component.tree.is_empty());
    }

    #[test]
    fn test_component_deserializes_inline_type() {
        let component: SourceComponent = serde_json::from_value(serde_json::json!({
            "fullName": "MyPage",
            "type": { "id": "apexpage", "name": "ApexPage" },
            "xml": "pages/MyPage.page-meta.xml"
        }))
        .unwrap();
        match component.type_ref {
            TypeRef::Inline(metadata_type) => assert_eq!(metadata_type.name, "ApexPage"),
            TypeRef::Key(_) => panic!("expected inline type descriptor"),
        }
    }
}
