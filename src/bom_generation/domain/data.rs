use crate::bom_generation::domain::component::Property;
use crate::bom_generation::domain::organization::{OrganizationalContact, OrganizationalEntity};
use serde::{Deserialize, Serialize};

/// Kind of data carried by a `data` component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataType {
    SourceCode,
    Configuration,
    Dataset,
    Definition,
    Other,
}

/// One entry of a component's `data` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataComponent {
    #[serde(rename = "type")]
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<DataContents>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sensitive_data: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governance: Option<DataGovernance>,
}

impl DataComponent {
    pub fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            name: None,
            contents: None,
            classification: None,
            sensitive_data: Vec::new(),
            governance: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = non_empty(name);
        self
    }

    /// Points the contents at an external location; empty URLs are ignored.
    pub fn with_url(mut self, url: &str) -> Self {
        if let Some(url) = non_empty(url) {
            self.contents.get_or_insert_with(DataContents::default).url = Some(url);
        }
        self
    }

    pub fn with_classification(mut self, classification: &str) -> Self {
        self.classification = non_empty(classification);
        self
    }

    pub fn with_owner(mut self, owner: OrganizationalEntity) -> Self {
        self.governance
            .get_or_insert_with(DataGovernance::default)
            .owners
            .push(DataGovernanceParty {
                organization: Some(owner),
                contact: None,
            });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataContents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
}

/// Inline content, e.g. a base64 encoded image in a model card graphic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataGovernance {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custodians: Vec<DataGovernanceParty>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stewards: Vec<DataGovernanceParty>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<DataGovernanceParty>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataGovernanceParty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationalEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<OrganizationalContact>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
