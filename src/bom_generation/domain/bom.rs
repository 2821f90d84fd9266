use crate::bom_generation::domain::component::{Component, ComponentType, ExternalReference};
use crate::bom_generation::domain::organization::{OrganizationalContact, OrganizationalEntity};
use crate::bom_generation::domain::vulnerability::Vulnerability;
use crate::bom_generation::domain::BomRef;
use crate::shared::error::BomError;
use serde::{Deserialize, Serialize};

pub const BOM_FORMAT: &str = "CycloneDX";
pub const SPEC_VERSION: &str = "1.6";

/// CycloneDX document root.
///
/// Components and vulnerabilities are appended in call order. The engine
/// never sorts, merges or deduplicates them, and never bumps `version`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bom {
    pub bom_format: String,
    pub spec_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<Dependency>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vulnerabilities: Vec<Vulnerability>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compositions: Vec<Composition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_references: Vec<ExternalReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lifecycles: Vec<Lifecycle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Tools>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<OrganizationalContact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<Box<Component>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<OrganizationalEntity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lifecycle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<LifecyclePhase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifecyclePhase {
    Design,
    PreBuild,
    Build,
    PostBuild,
    Operations,
    Discovery,
    Decommission,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tools {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ToolComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolComponent {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<OrganizationalEntity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    #[serde(rename = "ref")]
    pub bom_ref: BomRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<BomRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provides: Vec<BomRef>,
}

impl Dependency {
    pub fn new(bom_ref: BomRef, depends_on: Vec<BomRef>) -> Self {
        Self {
            bom_ref,
            depends_on,
            provides: Vec::new(),
        }
    }
}

/// Completeness statement for a set of components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    #[serde(rename = "bom-ref", default, skip_serializing_if = "Option::is_none")]
    pub bom_ref: Option<BomRef>,
    pub aggregate: Aggregate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assemblies: Vec<BomRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<BomRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    Complete,
    Incomplete,
    IncompleteFirstPartyOnly,
    IncompleteThirdPartyOnly,
    Unknown,
    NotSpecified,
}

impl Bom {
    /// Empty document: format, spec version and `version = 1`, nothing else.
    pub fn new() -> Self {
        Self {
            bom_format: BOM_FORMAT.to_string(),
            spec_version: SPEC_VERSION.to_string(),
            serial_number: None,
            version: 1,
            metadata: None,
            components: Vec::new(),
            dependencies: Vec::new(),
            vulnerabilities: Vec::new(),
            compositions: Vec::new(),
            external_references: Vec::new(),
        }
    }

    pub fn set_serial_number(&mut self, serial_number: impl Into<String>) -> &mut Self {
        self.serial_number = Some(serial_number.into());
        self
    }

    pub fn add_lifecycle(&mut self, phase: LifecyclePhase) -> &mut Self {
        self.metadata_mut().lifecycles.push(Lifecycle {
            phase: Some(phase),
            ..Lifecycle::default()
        });
        self
    }

    pub fn set_metadata_component(&mut self, component: Component) -> &mut Self {
        self.metadata_mut().component = Some(Box::new(component));
        self
    }

    pub fn add_component(&mut self, component: Component) -> &mut Self {
        self.components.push(component);
        self
    }

    pub fn add_components(&mut self, components: impl IntoIterator<Item = Component>) -> &mut Self {
        self.components.extend(components);
        self
    }

    pub fn add_vulnerability(&mut self, vulnerability: Vulnerability) -> &mut Self {
        self.vulnerabilities.push(vulnerability);
        self
    }

    pub fn add_vulnerabilities(
        &mut self,
        vulnerabilities: impl IntoIterator<Item = Vulnerability>,
    ) -> &mut Self {
        self.vulnerabilities.extend(vulnerabilities);
        self
    }

    pub fn add_dependency(&mut self, dependency: Dependency) -> &mut Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn add_composition(&mut self, composition: Composition) -> &mut Self {
        self.compositions.push(composition);
        self
    }

    pub fn add_external_reference(&mut self, reference: ExternalReference) -> &mut Self {
        self.external_references.push(reference);
        self
    }

    /// First component carrying the given bom-ref.
    pub fn component(&self, bom_ref: &BomRef) -> Option<&Component> {
        self.components.iter().find(|c| &c.bom_ref == bom_ref)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, BomError> {
        serde_json::to_string_pretty(self).map_err(|e| BomError::Serialization {
            details: e.to_string(),
        })
    }

    pub fn to_json_compact(&self) -> Result<String, BomError> {
        serde_json::to_string(self).map_err(|e| BomError::Serialization {
            details: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, BomError> {
        serde_json::from_str(json).map_err(|e| BomError::Deserialization {
            details: e.to_string(),
        })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, BomError> {
        serde_json::from_slice(bytes).map_err(|e| BomError::Deserialization {
            details: e.to_string(),
        })
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        self.metadata.get_or_insert_with(Metadata::default)
    }
}

impl Default for Bom {
    fn default() -> Self {
        Self::new()
    }
}
