//! Rendered package documents.
//!
//! The manifest and assembly-definition payloads are built as serde
//! documents and serialized, so names or descriptions carrying quotes or
//! braces cannot corrupt the output. The boilerplate script is the one text
//! template left: its output is C# source, not a structured document.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Version stamped into every freshly scaffolded manifest.
pub const INITIAL_VERSION: &str = "0.0.1";
/// Unity release line the generated packages target.
pub const UNITY_VERSION: &str = "2021.3";
const EDITOR_PLATFORM: &str = "Editor";

/// `package.json` payload for a scaffolded package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub description: String,
    pub unity: String,
    pub dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// `name` and `organization` are expected pre-normalized by the caller;
    /// only the identifier's name segment is lower-cased here.
    pub fn new(name: &str, description: &str, organization: &str) -> Self {
        Self {
            name: format!("com.{}.{}", organization, name.to_lowercase()),
            version: INITIAL_VERSION.to_string(),
            display_name: name.to_string(),
            description: description.to_string(),
            unity: UNITY_VERSION.to_string(),
            dependencies: BTreeMap::new(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        render(self)
    }
}

/// Assembly-definition (`.asmdef`) payload for one compilation unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDefinition {
    pub name: String,
    pub references: Vec<String>,
    pub include_platforms: Vec<String>,
    pub exclude_platforms: Vec<String>,
    pub allow_unsafe_code: bool,
    pub override_references: bool,
    pub precompiled_references: Vec<String>,
    pub auto_referenced: bool,
    pub define_constraints: Vec<String>,
    pub version_defines: Vec<String>,
    pub no_engine_references: bool,
}

impl ModuleDefinition {
    fn with_defaults(name: String) -> Self {
        Self {
            name,
            references: Vec::new(),
            include_platforms: Vec::new(),
            exclude_platforms: Vec::new(),
            allow_unsafe_code: false,
            override_references: false,
            precompiled_references: Vec::new(),
            auto_referenced: true,
            define_constraints: Vec::new(),
            version_defines: Vec::new(),
            no_engine_references: false,
        }
    }

    /// Runtime assembly: no references, no platform restrictions.
    pub fn runtime(package_name: &str) -> Self {
        Self::with_defaults(format!("{package_name}.Runtime"))
    }

    /// Editor assembly: references the runtime assembly, editor-only.
    pub fn editor(package_name: &str) -> Self {
        let mut definition = Self::with_defaults(format!("{package_name}.Editor"));
        definition.references = vec![format!("{package_name}.Runtime")];
        definition.include_platforms = vec![EDITOR_PLATFORM.to_string()];
        definition
    }

    pub fn to_json(&self) -> Result<String> {
        render(self)
    }
}

fn render<T: Serialize>(document: &T) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(document)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Boilerplate MonoBehaviour that greets with the package name on `Start`.
pub fn default_script(package_name: &str) -> String {
    format!(
        r#"using UnityEngine;

namespace {name}
{{
    public class {name}_DefaultScript : MonoBehaviour
    {{
        void Start()
        {{
            Debug.Log("Hello World! this is the package {name}");
        }}
    }}
}}
"#,
        name = package_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn manifest_carries_identifier_display_name_and_description() {
        let manifest = PackageManifest::new("Foo", "Bar", "acme");
        assert_eq!(manifest.name, "com.acme.foo");
        assert_eq!(manifest.display_name, "Foo");
        assert_eq!(manifest.description, "Bar");

        let value: Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();
        assert_eq!(value["name"], "com.acme.foo");
        assert_eq!(value["displayName"], "Foo");
        assert_eq!(value["description"], "Bar");
        assert_eq!(value["version"], INITIAL_VERSION);
        assert_eq!(value["unity"], UNITY_VERSION);
        assert!(value["dependencies"].as_object().unwrap().is_empty());
    }

    #[test]
    fn runtime_module_has_no_references() {
        let definition = ModuleDefinition::runtime("Foo");
        assert_eq!(definition.name, "Foo.Runtime");
        assert!(definition.references.is_empty());
        assert!(definition.include_platforms.is_empty());
        assert!(definition.auto_referenced);
        assert!(!definition.allow_unsafe_code);
    }

    #[test]
    fn editor_module_references_runtime_and_is_editor_only() {
        let definition = ModuleDefinition::editor("Foo");
        assert_eq!(definition.name, "Foo.Editor");
        assert_eq!(definition.references, vec!["Foo.Runtime".to_string()]);
        assert_eq!(definition.include_platforms, vec!["Editor".to_string()]);
        assert!(definition.exclude_platforms.is_empty());
    }

    #[test]
    fn asmdef_serializes_with_unity_field_names() {
        let json = ModuleDefinition::runtime("Foo").to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        for key in [
            "name",
            "references",
            "includePlatforms",
            "excludePlatforms",
            "allowUnsafeCode",
            "overrideReferences",
            "precompiledReferences",
            "autoReferenced",
            "defineConstraints",
            "versionDefines",
            "noEngineReferences",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn hostile_description_cannot_corrupt_the_manifest() {
        let manifest = PackageManifest::new("Foo", r#"has "quotes" and {braces}"#, "acme");
        let value: Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();
        assert_eq!(value["description"], r#"has "quotes" and {braces}"#);
    }

    #[test]
    fn default_script_greets_with_the_package_name() {
        let script = default_script("Widgets");
        assert!(script.contains("namespace Widgets"));
        assert!(script.contains("class Widgets_DefaultScript"));
        assert!(script.contains("Hello World! this is the package Widgets"));
    }
}
