//! ML-BOM payload: the `modelCard` object of a machine-learning-model component.
//!
//! Every section is optional and created on first use by the `with_*`
//! builder methods, so an untouched card serializes to `{}`.

use crate::bom_generation::domain::data::Attachment;
use crate::bom_generation::domain::BomRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_parameters: Option<ModelParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantitative_analysis: Option<QuantitativeAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub considerations: Option<Considerations>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approach: Option<Approach>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_architecture: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datasets: Vec<DatasetRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<ModelIo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<ModelIo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approach {
    #[serde(rename = "type")]
    pub approach_type: ApproachType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApproachType {
    Supervised,
    Unsupervised,
    ReinforcementLearning,
    SemiSupervised,
    SelfSupervised,
}

/// Reference from a model to a dataset component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRef {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub dataset_type: Option<String>,
    #[serde(rename = "ref")]
    pub bom_ref: BomRef,
    /// training, validation or testing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelIo {
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantitativeAnalysis {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub performance_metrics: Vec<PerformanceMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphics: Option<Graphics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetric {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_interval: Option<ConfidenceInterval>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceInterval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graphics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collection: Vec<Graphic>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Attachment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Considerations {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub use_cases: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technical_limitations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub performance_tradeoffs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ethical_considerations: Vec<EthicalConsideration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fairness_assessments: Vec<FairnessAssessment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthicalConsideration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mitigation_strategy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FairnessAssessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_at_risk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mitigation_strategy: Option<String>,
}

impl ModelCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no section has been created.
    pub fn is_empty(&self) -> bool {
        self.model_parameters.is_none()
            && self.quantitative_analysis.is_none()
            && self.considerations.is_none()
    }

    pub fn with_approach(mut self, approach_type: ApproachType) -> Self {
        self.parameters().approach = Some(Approach { approach_type });
        self
    }

    pub fn with_task(mut self, task: &str) -> Self {
        self.parameters().task = Some(task.to_string());
        self
    }

    /// Sets the architecture family (e.g. "transformer") and concrete architecture.
    pub fn with_architecture(mut self, family: &str, architecture: &str) -> Self {
        let parameters = self.parameters();
        parameters.architecture_family = Some(family.to_string());
        parameters.model_architecture = Some(architecture.to_string());
        self
    }

    pub fn with_dataset(mut self, bom_ref: BomRef, classification: &str) -> Self {
        self.parameters().datasets.push(DatasetRef {
            dataset_type: Some("dataset".to_string()),
            bom_ref,
            classification: Some(classification.to_string()).filter(|c| !c.is_empty()),
        });
        self
    }

    pub fn with_input(mut self, format: &str) -> Self {
        self.parameters().inputs.push(ModelIo {
            format: format.to_string(),
        });
        self
    }

    pub fn with_output(mut self, format: &str) -> Self {
        self.parameters().outputs.push(ModelIo {
            format: format.to_string(),
        });
        self
    }

    pub fn with_metric(mut self, metric_type: &str, value: &str) -> Self {
        self.analysis().performance_metrics.push(PerformanceMetric {
            metric_type: Some(metric_type.to_string()),
            value: Some(value.to_string()),
            ..PerformanceMetric::default()
        });
        self
    }

    pub fn with_graphic(mut self, name: &str, image: Option<Attachment>) -> Self {
        self.analysis()
            .graphics
            .get_or_insert_with(Graphics::default)
            .collection
            .push(Graphic {
                name: Some(name.to_string()),
                image,
            });
        self
    }

    pub fn with_user(mut self, user: &str) -> Self {
        self.considerations_mut().users.push(user.to_string());
        self
    }

    pub fn with_use_case(mut self, use_case: &str) -> Self {
        self.considerations_mut().use_cases.push(use_case.to_string());
        self
    }

    pub fn with_limitation(mut self, limitation: &str) -> Self {
        self.considerations_mut()
            .technical_limitations
            .push(limitation.to_string());
        self
    }

    pub fn with_tradeoff(mut self, tradeoff: &str) -> Self {
        self.considerations_mut()
            .performance_tradeoffs
            .push(tradeoff.to_string());
        self
    }

    pub fn with_ethical_consideration(mut self, name: &str, mitigation: &str) -> Self {
        self.considerations_mut()
            .ethical_considerations
            .push(EthicalConsideration {
                name: Some(name.to_string()),
                mitigation_strategy: Some(mitigation.to_string()).filter(|m| !m.is_empty()),
            });
        self
    }

    pub fn with_fairness_assessment(mut self, assessment: FairnessAssessment) -> Self {
        self.considerations_mut()
            .fairness_assessments
            .push(assessment);
        self
    }

    fn parameters(&mut self) -> &mut ModelParameters {
        self.model_parameters
            .get_or_insert_with(ModelParameters::default)
    }

    fn analysis(&mut self) -> &mut QuantitativeAnalysis {
        self.quantitative_analysis
            .get_or_insert_with(QuantitativeAnalysis::default)
    }

    fn considerations_mut(&mut self) -> &mut Considerations {
        self.considerations.get_or_insert_with(Considerations::default)
    }
}
