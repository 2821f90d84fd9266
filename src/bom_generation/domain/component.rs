use crate::bom_generation::domain::crypto::CryptoProperties;
use crate::bom_generation::domain::data::DataComponent;
use crate::bom_generation::domain::model_card::ModelCard;
use crate::bom_generation::domain::BomRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace for scanner provenance properties (`zero:severity`, `zero:file`, ...).
pub const PROVENANCE_PREFIX: &str = "zero:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    Application,
    Framework,
    Library,
    Container,
    Platform,
    OperatingSystem,
    Device,
    DeviceDriver,
    Firmware,
    File,
    MachineLearningModel,
    Data,
    CryptographicAsset,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Application => "application",
            ComponentType::Framework => "framework",
            ComponentType::Library => "library",
            ComponentType::Container => "container",
            ComponentType::Platform => "platform",
            ComponentType::OperatingSystem => "operating-system",
            ComponentType::Device => "device",
            ComponentType::DeviceDriver => "device-driver",
            ComponentType::Firmware => "firmware",
            ComponentType::File => "file",
            ComponentType::MachineLearningModel => "machine-learning-model",
            ComponentType::Data => "data",
            ComponentType::CryptographicAsset => "cryptographic-asset",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind-specific payload of a component. At most one is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComponentPayload {
    #[serde(rename = "cryptoProperties")]
    Crypto(CryptoProperties),
    #[serde(rename = "modelCard")]
    ModelCard(ModelCard),
    #[serde(rename = "data")]
    Data(Vec<DataComponent>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    #[serde(rename = "bom-ref", default, skip_serializing_if = "BomRef::is_empty")]
    pub bom_ref: BomRef,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<LicenseChoice>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_references: Vec<ExternalReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
    #[serde(flatten)]
    pub payload: Option<ComponentPayload>,
}

impl Component {
    pub fn new(component_type: ComponentType, name: impl Into<String>, bom_ref: BomRef) -> Self {
        Self {
            component_type,
            bom_ref,
            name: name.into(),
            version: None,
            group: None,
            description: None,
            purl: None,
            licenses: Vec::new(),
            properties: Vec::new(),
            external_references: Vec::new(),
            evidence: None,
            payload: None,
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = non_empty(version);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = non_empty(description);
        self
    }

    pub fn with_payload(mut self, payload: ComponentPayload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn add_property(&mut self, name: &str, value: &str) -> &mut Self {
        self.properties.push(Property {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Adds a `zero:<key>` provenance property. Empty values are skipped.
    pub fn add_provenance(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.trim().is_empty() {
            self.add_property(&format!("{}{}", PROVENANCE_PREFIX, key), value);
        }
        self
    }

    /// Adds an external reference. Empty URLs are skipped.
    pub fn add_external_reference(
        &mut self,
        reference_type: ExternalReferenceType,
        url: &str,
    ) -> &mut Self {
        if !url.trim().is_empty() {
            self.external_references
                .push(ExternalReference::new(reference_type, url));
        }
        self
    }

    /// Adds a license as an SPDX expression, an SPDX id or a free-text name.
    ///
    /// Text containing ` OR `, ` AND ` or ` WITH ` is an expression, text
    /// with other whitespace is a name, anything else is treated as an id.
    pub fn add_license(&mut self, license: &str) -> &mut Self {
        let license = license.trim();
        if license.is_empty() {
            return self;
        }
        let choice = if [" OR ", " AND ", " WITH "]
            .iter()
            .any(|op| license.contains(op))
        {
            LicenseChoice::Expression(license.to_string())
        } else if license.contains(char::is_whitespace) {
            LicenseChoice::License(License {
                name: Some(license.to_string()),
                ..License::default()
            })
        } else {
            LicenseChoice::License(License {
                id: Some(license.to_string()),
                ..License::default()
            })
        };
        self.licenses.push(choice);
        self
    }

    /// Records where the component was found.
    pub fn add_occurrence(&mut self, location: &str, line: Option<u32>) -> &mut Self {
        if location.trim().is_empty() {
            return self;
        }
        self.evidence
            .get_or_insert_with(Evidence::default)
            .occurrences
            .push(Occurrence {
                location: location.to_string(),
                line: line.filter(|l| *l > 0),
            });
        self
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn crypto_properties(&self) -> Option<&CryptoProperties> {
        match &self.payload {
            Some(ComponentPayload::Crypto(crypto)) => Some(crypto),
            _ => None,
        }
    }

    pub fn model_card(&self) -> Option<&ModelCard> {
        match &self.payload {
            Some(ComponentPayload::ModelCard(card)) => Some(card),
            _ => None,
        }
    }

    /// Removes and returns the model card so it can be extended.
    pub fn take_model_card(&mut self) -> Option<ModelCard> {
        match self.payload.take() {
            Some(ComponentPayload::ModelCard(card)) => Some(card),
            other => {
                self.payload = other;
                None
            }
        }
    }

    pub fn data(&self) -> Option<&[DataComponent]> {
        match &self.payload {
            Some(ComponentPayload::Data(data)) => Some(data),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// Either a single license or an SPDX license expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseChoice {
    License(License),
    Expression(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExternalReferenceType {
    Vcs,
    IssueTracker,
    Website,
    Advisories,
    Bom,
    Documentation,
    Support,
    License,
    BuildMeta,
    ReleaseNotes,
    ModelCard,
    Evidence,
    Attestation,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalReference {
    #[serde(rename = "type")]
    pub reference_type: ExternalReferenceType,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ExternalReference {
    pub fn new(reference_type: ExternalReferenceType, url: &str) -> Self {
        Self {
            reference_type,
            url: url.to_string(),
            comment: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occurrences: Vec<Occurrence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
