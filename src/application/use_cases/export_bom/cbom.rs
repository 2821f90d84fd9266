use super::{found_in, id_segment, with_scanner_provenance, Section};
use crate::application::dto::Finding;
use crate::bom_generation::domain::{Bom, BomRef, KeyMaterialType, ScoreMethod, Vulnerability};
use crate::bom_generation::policies::{EscalationPolicy, FindingKind, SeverityPolicy};
use crate::bom_generation::services::{
    CertificateDescriptor, ComponentFactory, CryptoClassifier, SourceLocation,
};
use std::collections::HashMap;

const CRYPTO_SCANNER: &str = "Zero Crypto Scanner";
const HARDCODED_KEY_RECOMMENDATION: &str = "Remove hardcoded keys and use secure key management";

pub(super) const SECTIONS: &[Section<CbomAssembler>] = &[
    ("ciphers", CbomAssembler::ciphers),
    ("keys", CbomAssembler::keys),
    ("tls", CbomAssembler::tls),
    ("certificates", CbomAssembler::certificates),
];

/// Per-export state for CBOM assembly.
#[derive(Debug, Default)]
pub(super) struct CbomAssembler {
    /// First certificate component parsed from each file
    certificates_by_file: HashMap<String, BomRef>,
}

impl CbomAssembler {
    fn ciphers(&mut self, findings: Finding<'_>, bom: &mut Bom) {
        for cipher in findings.section("ciphers") {
            let algorithm = cipher.str("algorithm");
            let reported = cipher.str("severity");
            let severity = SeverityPolicy::to_cyclonedx(reported);
            let description = cipher.str("description");
            let location = SourceLocation::new(cipher.str("file"), Some(cipher.u32("line")));
            let mode = CryptoClassifier::extract_mode(algorithm, description);

            let component =
                ComponentFactory::cipher_finding(algorithm, mode, reported, description, location);
            let affected = component.bom_ref.clone();

            if EscalationPolicy::emits_component(FindingKind::Cipher, severity) {
                bom.add_component(component);
            }
            if EscalationPolicy::emits_vulnerability(FindingKind::Cipher, severity) {
                let vulnerability =
                    Vulnerability::new(format!("CRYPTO-WEAK-{}", id_segment(algorithm)))
                        .with_source(CRYPTO_SCANNER)
                        .with_description(description)
                        .with_detail(&found_in(SourceLocation::new(location.file, None)))
                        .with_recommendation(cipher.str("suggestion"))
                        .with_rating(severity, ScoreMethod::Other)
                        .with_cwe(SeverityPolicy::cwe_to_int(cipher.str("cwe")))
                        .with_affect(affected);
                bom.add_vulnerability(with_scanner_provenance(vulnerability, reported, location));
            }
        }
    }

    fn keys(&mut self, findings: Finding<'_>, bom: &mut Bom) {
        for key in findings.section("keys") {
            let reported = key.str("severity");
            let severity = SeverityPolicy::to_cyclonedx(reported);
            if !EscalationPolicy::emits_vulnerability(FindingKind::Key, severity) {
                continue;
            }

            let location = SourceLocation::new(key.str("file"), Some(key.u32("line")));
            let vulnerability =
                Vulnerability::new(format!("CRYPTO-HARDCODED-KEY-{}", id_segment(key.str("type"))))
                    .with_source(CRYPTO_SCANNER)
                    .with_description(key.str("description"))
                    .with_detail(&found_in(location))
                    .with_recommendation(HARDCODED_KEY_RECOMMENDATION)
                    .with_rating(severity, ScoreMethod::Other)
                    .with_cwe(SeverityPolicy::cwe_to_int(key.str("cwe")));
            bom.add_vulnerability(with_scanner_provenance(vulnerability, reported, location));
        }
    }

    fn tls(&mut self, findings: Finding<'_>, bom: &mut Bom) {
        for tls in findings.section("tls") {
            let finding_type = tls.str("type");
            let reported = tls.str("severity");
            let severity = SeverityPolicy::to_cyclonedx(reported);
            let description = tls.str("description");
            let location = SourceLocation::new(tls.str("file"), Some(tls.u32("line")));
            let version = CryptoClassifier::extract_tls_version(finding_type, description);

            let component = ComponentFactory::tls_finding(
                finding_type,
                version,
                reported,
                description,
                location,
            );
            let affected = component.bom_ref.clone();
            let emits_component = EscalationPolicy::emits_component(FindingKind::Tls, severity);

            if emits_component {
                bom.add_component(component);
            }
            if EscalationPolicy::emits_vulnerability(FindingKind::Tls, severity) {
                let mut vulnerability =
                    Vulnerability::new(format!("CRYPTO-TLS-{}", id_segment(finding_type)))
                        .with_source(CRYPTO_SCANNER)
                        .with_description(description)
                        .with_detail(&found_in(location))
                        .with_recommendation(tls.str("suggestion"))
                        .with_rating(severity, ScoreMethod::Other)
                        .with_cwe(SeverityPolicy::cwe_to_int(tls.str("cwe")));
                if emits_component {
                    vulnerability = vulnerability.with_affect(affected);
                }
                bom.add_vulnerability(with_scanner_provenance(vulnerability, reported, location));
            }
        }
    }

    fn certificates(&mut self, findings: Finding<'_>, bom: &mut Bom) {
        let Some(certificates) = findings.object("certificates") else {
            return;
        };

        for certificate in certificates.section("certificates") {
            let descriptor = CertificateDescriptor {
                subject: certificate.str("subject"),
                issuer: certificate.str("issuer"),
                not_before: certificate.str("not_before"),
                not_after: certificate.str("not_after"),
                signature_algorithm: certificate.str("signature_algorithm"),
                key_type: certificate.str("key_type"),
                key_size: certificate.u32("key_size"),
                file: certificate.str("file"),
                self_signed: certificate.bool("is_self_signed"),
            };

            let component = ComponentFactory::certificate_info(&descriptor);
            let file = descriptor.file.trim();
            if !file.is_empty() {
                self.certificates_by_file
                    .entry(file.to_string())
                    .or_insert_with(|| component.bom_ref.clone());
            }
            bom.add_component(component);
            add_related_assets(&descriptor, bom);
        }

        for finding in certificates.section("findings") {
            let reported = finding.str("severity");
            let file = finding.str("file").trim();

            let mut vulnerability =
                Vulnerability::new(format!("CRYPTO-CERT-{}", id_segment(finding.str("type"))))
                    .with_source(CRYPTO_SCANNER)
                    .with_description(finding.str("description"))
                    .with_recommendation(finding.str("suggestion"))
                    .with_rating(SeverityPolicy::to_cyclonedx(reported), ScoreMethod::Other);
            if !file.is_empty() {
                let affected = self
                    .certificates_by_file
                    .get(file)
                    .cloned()
                    .unwrap_or_else(|| BomRef::certificate(file));
                vulnerability = vulnerability
                    .with_detail(&format!("Certificate file: {}", file))
                    .with_affect(affected);
            }
            bom.add_vulnerability(with_scanner_provenance(
                vulnerability,
                reported,
                SourceLocation::new(file, None),
            ));
        }
    }
}

/// Adds the signature algorithm, public key and key algorithm a certificate
/// points at, so its references resolve within the document.
///
/// These are reference targets, not findings: one is skipped when a component
/// with the same bom-ref already exists, whether from an earlier certificate
/// or from a cipher finding. Finding-derived components are never skipped.
fn add_related_assets(certificate: &CertificateDescriptor, bom: &mut Bom) {
    let signature = certificate.signature_algorithm.trim();
    let key_type = certificate.key_type.trim();

    let mut related = Vec::new();
    if !signature.is_empty() {
        related.push(ComponentFactory::algorithm(signature, None, 0));
    }
    if !key_type.is_empty() {
        related.push(ComponentFactory::key_material(
            KeyMaterialType::PublicKey,
            certificate.key_size,
            key_type,
        ));
        related.push(ComponentFactory::algorithm(key_type, None, certificate.key_size));
    }

    for component in related {
        if bom.component(&component.bom_ref).is_none() {
            bom.add_component(component);
        }
    }
}
