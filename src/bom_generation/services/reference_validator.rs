use crate::bom_generation::domain::{Bom, BomRef, Component, CryptoAsset};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Problem found by [`ReferenceValidator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceIssue {
    /// A reference that no component in the document carries
    DanglingReference { source: String, bom_ref: BomRef },
    /// Several components carrying the same bom-ref
    DuplicateBomRef { bom_ref: BomRef, count: usize },
    /// A `not_affected` analysis without a justification
    MissingJustification { vulnerability_id: String },
}

impl fmt::Display for ReferenceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceIssue::DanglingReference { source, bom_ref } => {
                write!(f, "{} references unknown bom-ref '{}'", source, bom_ref)
            }
            ReferenceIssue::DuplicateBomRef { bom_ref, count } => {
                write!(f, "bom-ref '{}' is used by {} components", bom_ref, count)
            }
            ReferenceIssue::MissingJustification { vulnerability_id } => write!(
                f,
                "vulnerability {} is not_affected without a justification",
                vulnerability_id
            ),
        }
    }
}

/// ReferenceValidator service for the bom-ref graph
///
/// Assembly never checks references, so a finished document may point at
/// components it does not contain. This opt-in pass reports such problems
/// without changing the document.
pub struct ReferenceValidator;

impl ReferenceValidator {
    /// Validates every bom-ref in the document
    ///
    /// # Returns
    /// Issues in a stable order: duplicates (by bom-ref), then dangling
    /// references and missing justifications in document order
    pub fn validate(bom: &Bom) -> Vec<ReferenceIssue> {
        let mut issues = Vec::new();

        let mut counts: BTreeMap<&BomRef, usize> = BTreeMap::new();
        for component in Self::all_components(bom) {
            if !component.bom_ref.is_empty() {
                *counts.entry(&component.bom_ref).or_default() += 1;
            }
        }
        issues.extend(
            counts
                .iter()
                .filter(|(_, count)| **count > 1)
                .map(|(bom_ref, count)| ReferenceIssue::DuplicateBomRef {
                    bom_ref: (*bom_ref).clone(),
                    count: *count,
                }),
        );

        let known: BTreeSet<&BomRef> = counts.keys().copied().collect();
        let mut check = |source: String, bom_ref: &BomRef| {
            if !known.contains(bom_ref) {
                issues.push(ReferenceIssue::DanglingReference {
                    source,
                    bom_ref: bom_ref.clone(),
                });
            }
        };

        for component in Self::all_components(bom) {
            for bom_ref in Self::outgoing_references(component) {
                check(format!("component {}", component.bom_ref), bom_ref);
            }
        }
        for dependency in &bom.dependencies {
            check("dependency".to_string(), &dependency.bom_ref);
            for bom_ref in dependency.depends_on.iter().chain(&dependency.provides) {
                check(format!("dependency {}", dependency.bom_ref), bom_ref);
            }
        }
        for composition in &bom.compositions {
            for bom_ref in composition.assemblies.iter().chain(&composition.dependencies) {
                check("composition".to_string(), bom_ref);
            }
        }
        for vulnerability in &bom.vulnerabilities {
            for affect in &vulnerability.affects {
                check(format!("vulnerability {}", vulnerability.id), &affect.bom_ref);
            }
        }

        issues.extend(
            bom.vulnerabilities
                .iter()
                .filter(|v| v.analysis.as_ref().is_some_and(|a| a.is_missing_justification()))
                .map(|v| ReferenceIssue::MissingJustification {
                    vulnerability_id: v.id.clone(),
                }),
        );

        issues
    }

    fn all_components(bom: &Bom) -> impl Iterator<Item = &Component> {
        bom.metadata
            .as_ref()
            .and_then(|m| m.component.as_deref())
            .into_iter()
            .chain(bom.components.iter())
    }

    fn outgoing_references(component: &Component) -> Vec<&BomRef> {
        let mut refs = Vec::new();

        if let Some(crypto) = component.crypto_properties() {
            match &crypto.asset {
                CryptoAsset::Algorithm { .. } => {}
                CryptoAsset::Certificate { properties } => {
                    refs.extend(properties.signature_algorithm_ref.as_ref());
                    refs.extend(properties.subject_public_key_ref.as_ref());
                }
                CryptoAsset::Protocol { properties } => {
                    refs.extend(properties.crypto_ref_array.iter());
                    for suite in &properties.cipher_suites {
                        refs.extend(suite.algorithms.iter());
                    }
                }
                CryptoAsset::RelatedCryptoMaterial { properties } => {
                    refs.extend(properties.algorithm_ref.as_ref());
                    if let Some(secured_by) = &properties.secured_by {
                        refs.extend(secured_by.algorithm_ref.as_ref());
                    }
                }
            }
        }

        if let Some(parameters) = component
            .model_card()
            .and_then(|card| card.model_parameters.as_ref())
        {
            refs.extend(parameters.datasets.iter().map(|d| &d.bom_ref));
        }

        refs
    }
}
