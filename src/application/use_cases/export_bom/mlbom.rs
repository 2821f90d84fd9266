use super::{id_segment, Section};
use crate::application::dto::Finding;
use crate::bom_generation::domain::{
    Bom, BomRef, Component, ComponentPayload, ScoreMethod, Vulnerability,
};
use crate::bom_generation::policies::SeverityPolicy;
use crate::bom_generation::services::{ComponentFactory, DatasetDescriptor, ModelDescriptor};
use std::collections::HashMap;

const SECURITY_SCANNER: &str = "Zero AI Security Scanner";
const GOVERNANCE_SCANNER: &str = "Zero AI Governance Scanner";
const UNKNOWN_VERSION: &str = "unknown";

pub(super) const SECTIONS: &[Section<MlbomAssembler>] = &[
    ("models", MlbomAssembler::models),
    ("frameworks", MlbomAssembler::frameworks),
    ("datasets", MlbomAssembler::datasets),
    ("security", MlbomAssembler::security),
    ("governance", MlbomAssembler::governance),
];

/// Per-export state for ML-BOM assembly.
#[derive(Debug, Default)]
pub(super) struct MlbomAssembler {
    /// First model component emitted for each model name
    models_by_name: HashMap<String, BomRef>,
}

impl MlbomAssembler {
    fn models(&mut self, findings: Finding<'_>, bom: &mut Bom) {
        for model in findings.section("models") {
            let descriptor = ModelDescriptor {
                name: model.str("name"),
                version: model.str("version"),
                source: model.str("source"),
                source_url: model.str("source_url"),
                format: model.str("format"),
                architecture: model.str("architecture"),
                task: model.str("task"),
                license: model.str("license"),
            };

            let mut component = ComponentFactory::ml_model(&descriptor);
            if let Some(details) = model.object("model_card") {
                merge_model_card(&mut component, details);
            }
            component
                .add_provenance("security_risk", model.str("security_risk"))
                .add_occurrence(model.str("file_path"), None);

            self.models_by_name
                .entry(descriptor.name.trim().to_string())
                .or_insert_with(|| component.bom_ref.clone());
            bom.add_component(component);
        }
    }

    fn frameworks(&mut self, findings: Finding<'_>, bom: &mut Bom) {
        for framework in findings.section("frameworks") {
            bom.add_component(ComponentFactory::framework(
                framework.str("name"),
                framework.str("version"),
                framework.str("category"),
                framework.str("package"),
            ));
        }
    }

    fn datasets(&mut self, findings: Finding<'_>, bom: &mut Bom) {
        for dataset in findings.section("datasets") {
            bom.add_component(ComponentFactory::dataset(&DatasetDescriptor {
                name: dataset.str("name"),
                source: dataset.str("source"),
                source_url: dataset.str("source_url"),
                license: dataset.str("license"),
                description: dataset.str("description"),
            }));
        }
    }

    fn security(&mut self, findings: Finding<'_>, bom: &mut Bom) {
        for finding in findings.section("security") {
            let category = finding.str("category");
            let fallback_id = match id_segment(category).as_str() {
                "" => "ML-SECURITY-FINDING".to_string(),
                segment => format!("ML-SECURITY-{}", segment),
            };
            let cwe = SeverityPolicy::category_to_cwe(category).and_then(SeverityPolicy::cwe_to_int);

            let vulnerability = self
                .ml_vulnerability(finding, &fallback_id, SECURITY_SCANNER)
                .with_cwe(cwe)
                .with_provenance("category", category);
            bom.add_vulnerability(vulnerability);
        }
    }

    fn governance(&mut self, findings: Finding<'_>, bom: &mut Bom) {
        for finding in findings.section("governance") {
            let vulnerability = self
                .ml_vulnerability(finding, "ML-GOVERNANCE-FINDING", GOVERNANCE_SCANNER)
                .with_provenance("category", finding.str("category"));
            bom.add_vulnerability(vulnerability);
        }
    }

    /// Builds the vulnerability shared by security and governance findings
    ///
    /// The scanner id is kept when present. `affects` points at the model
    /// emitted under `model_name` in this export, or at a name-derived ref
    /// when no such model was found.
    fn ml_vulnerability(&self, finding: Finding<'_>, fallback_id: &str, scanner: &str) -> Vulnerability {
        let id = match finding.str("id").trim() {
            "" => fallback_id,
            id => id,
        };
        let reported = finding.str("severity");
        let description = match (finding.str("title").trim(), finding.str("description").trim()) {
            ("", description) => description.to_string(),
            (title, "") => title.to_string(),
            (title, description) => format!("{}: {}", title, description),
        };

        let mut vulnerability = Vulnerability::new(id)
            .with_source(scanner)
            .with_description(&description)
            .with_recommendation(finding.str("remediation"))
            .with_rating(SeverityPolicy::to_cyclonedx(reported), ScoreMethod::Other)
            .with_provenance("severity", reported);

        let model_name = finding.str("model_name").trim();
        if !model_name.is_empty() {
            let affected = self
                .models_by_name
                .get(model_name)
                .cloned()
                .unwrap_or_else(|| BomRef::model(model_name, UNKNOWN_VERSION));
            vulnerability = vulnerability
                .with_affect(affected)
                .with_provenance("model_name", model_name);
        }
        vulnerability
    }
}

/// Merges scanner `model_card` details into the card built from the model
/// fields, so architecture and task survive alongside limitations,
/// intended use and training datasets.
fn merge_model_card(component: &mut Component, details: Finding<'_>) {
    let description = details.str("description").trim();
    if !description.is_empty() {
        component.description = Some(description.to_string());
    }

    let mut card = component.take_model_card().unwrap_or_default();
    let limitations = details.str("limitations").trim();
    if !limitations.is_empty() {
        card = card.with_limitation(limitations);
    }
    let intended_use = details.str("intended_use").trim();
    if !intended_use.is_empty() {
        card = card.with_use_case(intended_use);
    }
    for dataset in details.strings("datasets").into_iter().filter(|d| !d.trim().is_empty()) {
        card = card.with_dataset(BomRef::dataset(dataset), "training");
    }

    if !card.is_empty() {
        component.payload = Some(ComponentPayload::ModelCard(card));
    }
}
