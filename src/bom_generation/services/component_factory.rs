use crate::bom_generation::domain::crypto::{
    algorithm_name, AlgorithmProperties, CertificateProperties, CipherMode, CryptoAsset,
    CryptoProperties, KeyMaterialType, KeyState, ProtocolProperties, ProtocolType,
    RelatedCryptoMaterialProperties,
};
use crate::bom_generation::domain::{
    BomRef, Component, ComponentPayload, ComponentType, DataComponent, DataType,
    ExternalReferenceType, ModelCard,
};
use crate::bom_generation::services::{ArchitectureClassifier, CryptoClassifier};

const CERTIFICATE_FORMAT: &str = "X.509";
const CERTIFICATE_EXTENSION: &str = "pem";
const UNKNOWN_VERSION: &str = "unknown";

/// Where a finding was reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceLocation<'a> {
    pub file: &'a str,
    pub line: Option<u32>,
}

impl<'a> SourceLocation<'a> {
    pub fn new(file: &'a str, line: Option<u32>) -> Self {
        Self { file, line }
    }
}

/// Parsed X.509 certificate as reported by a certificate scanner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CertificateDescriptor<'a> {
    pub subject: &'a str,
    pub issuer: &'a str,
    pub not_before: &'a str,
    pub not_after: &'a str,
    pub signature_algorithm: &'a str,
    pub key_type: &'a str,
    pub key_size: u32,
    pub file: &'a str,
    pub self_signed: bool,
}

/// ML model as reported by a tech-identification scanner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelDescriptor<'a> {
    pub name: &'a str,
    pub version: &'a str,
    pub source: &'a str,
    pub source_url: &'a str,
    pub format: &'a str,
    pub architecture: &'a str,
    pub task: &'a str,
    pub license: &'a str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetDescriptor<'a> {
    pub name: &'a str,
    pub source: &'a str,
    pub source_url: &'a str,
    pub license: &'a str,
    pub description: &'a str,
}

/// ComponentFactory service building typed components
///
/// One constructor per asset kind. Each fixes the component `type`, builds
/// the bom-ref from category, name and version or size, and fills the
/// matching payload. Construction is pure: the same arguments always give
/// the same component, and nothing checks whether an equal component
/// already exists elsewhere.
pub struct ComponentFactory;

impl ComponentFactory {
    /// Creates a cryptographic algorithm component
    ///
    /// Primitive, functions, security level and OID are inferred from the
    /// algorithm name. A key size of 0 means unknown and is left out of the
    /// name, the bom-ref and `parameterSetIdentifier`.
    ///
    /// # Arguments
    /// * `algorithm` - Free-text algorithm name, e.g. "AES"
    /// * `mode` - Cipher mode, if known
    /// * `key_size` - Key size in bits, 0 when unknown
    ///
    /// # Examples
    /// ```
    /// use zero_bom::bom_generation::services::ComponentFactory;
    /// use zero_bom::bom_generation::domain::CipherMode;
    ///
    /// let component = ComponentFactory::algorithm("AES", Some(CipherMode::Gcm), 256);
    /// assert_eq!(component.bom_ref.as_str(), "crypto/algorithm/aes-gcm-256");
    /// assert_eq!(component.name, "AES-GCM-256");
    /// ```
    pub fn algorithm(algorithm: &str, mode: Option<CipherMode>, key_size: u32) -> Component {
        let primitive = CryptoClassifier::classify_primitive(algorithm);

        let mut properties = AlgorithmProperties::new(primitive);
        properties.parameter_set_identifier = (key_size > 0).then(|| key_size.to_string());
        properties.mode = mode;
        properties.crypto_functions = CryptoClassifier::derive_functions(primitive);
        properties.classical_security_level = Some(CryptoClassifier::estimate_security_level(
            algorithm, key_size,
        ));

        let crypto = CryptoProperties::new(CryptoAsset::Algorithm { properties })
            .with_oid(CryptoClassifier::lookup_oid(algorithm, mode, key_size));

        Component::new(
            ComponentType::CryptographicAsset,
            algorithm_name(algorithm, mode, key_size),
            BomRef::algorithm(algorithm, mode, key_size),
        )
        .with_payload(ComponentPayload::Crypto(crypto))
    }

    /// Creates a certificate component
    ///
    /// Links the signature algorithm and the subject public key by bom-ref.
    /// Empty algorithm or key type leaves the matching reference unset.
    pub fn certificate(certificate: &CertificateDescriptor) -> Component {
        let properties = CertificateProperties {
            subject_name: non_empty(certificate.subject),
            issuer_name: non_empty(certificate.issuer),
            not_valid_before: non_empty(certificate.not_before),
            not_valid_after: non_empty(certificate.not_after),
            signature_algorithm_ref: non_empty(certificate.signature_algorithm)
                .map(|sig| BomRef::algorithm(&sig, None, 0)),
            subject_public_key_ref: non_empty(certificate.key_type)
                .map(|key_type| BomRef::key(&key_type, certificate.key_size)),
            certificate_format: Some(CERTIFICATE_FORMAT.to_string()),
            certificate_extension: Some(CERTIFICATE_EXTENSION.to_string()),
        };

        Component::new(
            ComponentType::CryptographicAsset,
            format!("cert-{}", certificate.subject.trim()),
            BomRef::certificate(certificate.subject),
        )
        .with_payload(ComponentPayload::Crypto(CryptoProperties::new(
            CryptoAsset::Certificate { properties },
        )))
    }

    /// Creates a protocol component named `<TYPE>-<version>`, e.g. "TLS-1.2"
    pub fn protocol(protocol_type: ProtocolType, version: &str) -> Component {
        let properties = ProtocolProperties {
            protocol_type,
            version: non_empty(version),
            cipher_suites: Vec::new(),
            crypto_ref_array: Vec::new(),
        };

        Component::new(
            ComponentType::CryptographicAsset,
            format!("{}-{}", protocol_type.as_str().to_uppercase(), version.trim()),
            BomRef::protocol(protocol_type, version),
        )
        .with_payload(ComponentPayload::Crypto(CryptoProperties::new(
            CryptoAsset::Protocol { properties },
        )))
    }

    /// Creates an active key-material component referencing its algorithm
    pub fn key_material(material_type: KeyMaterialType, size: u32, algorithm: &str) -> Component {
        let properties = RelatedCryptoMaterialProperties {
            material_type,
            id: None,
            state: Some(KeyState::Active),
            size: (size > 0).then_some(size),
            algorithm_ref: non_empty(algorithm).map(|alg| BomRef::algorithm(&alg, None, size)),
            creation_date: None,
            activation_date: None,
            expiration_date: None,
            secured_by: None,
        };

        let mut name = format!("{}-{}", material_type.as_str(), algorithm.trim());
        if size > 0 {
            name = format!("{}-{}", name, size);
        }

        Component::new(
            ComponentType::CryptographicAsset,
            name,
            BomRef::key(algorithm, size),
        )
        .with_payload(ComponentPayload::Crypto(CryptoProperties::new(
            CryptoAsset::RelatedCryptoMaterial { properties },
        )))
    }

    /// Creates a machine-learning model component with its model card
    ///
    /// The card carries the architecture (with inferred family) and task.
    /// Missing versions become "unknown".
    pub fn ml_model(model: &ModelDescriptor) -> Component {
        let version = non_empty(model.version).unwrap_or_else(|| UNKNOWN_VERSION.to_string());
        let description = match (model.architecture.trim(), model.source.trim()) {
            ("", _) => String::new(),
            (architecture, "") => format!("{} model", architecture),
            (architecture, source) => format!("{} model from {}", architecture, source),
        };

        let mut card = ModelCard::new();
        if !model.architecture.trim().is_empty() {
            card = card.with_architecture(
                ArchitectureClassifier::infer_family(model.architecture),
                model.architecture.trim(),
            );
        }
        if !model.task.trim().is_empty() {
            card = card.with_task(model.task.trim());
        }

        let mut component = Component::new(
            ComponentType::MachineLearningModel,
            model.name.trim(),
            BomRef::model(model.name, &version),
        )
        .with_version(&version)
        .with_description(&description);
        if !card.is_empty() {
            component = component.with_payload(ComponentPayload::ModelCard(card));
        }

        component
            .add_license(model.license)
            .add_external_reference(ExternalReferenceType::Website, model.source_url)
            .add_provenance("source", model.source)
            .add_provenance("format", model.format);
        component
    }

    /// Creates a dataset component carrying a `data` payload
    pub fn dataset(dataset: &DatasetDescriptor) -> Component {
        let data = DataComponent::new(DataType::Dataset)
            .with_name(dataset.name.trim())
            .with_url(dataset.source_url);

        let mut component = Component::new(
            ComponentType::Data,
            dataset.name.trim(),
            BomRef::dataset(dataset.name),
        )
        .with_description(dataset.description)
        .with_payload(ComponentPayload::Data(vec![data]));

        component
            .add_license(dataset.license)
            .add_external_reference(ExternalReferenceType::Website, dataset.source_url)
            .add_provenance("source", dataset.source);
        component
    }

    /// Creates an ML framework component. Missing versions become "unknown".
    pub fn framework(name: &str, version: &str, category: &str, package: &str) -> Component {
        let version = non_empty(version).unwrap_or_else(|| UNKNOWN_VERSION.to_string());

        let mut component = Component::new(
            ComponentType::Framework,
            name.trim(),
            BomRef::framework(name, &version),
        )
        .with_version(&version);

        component
            .add_provenance("category", category)
            .add_provenance("package", package);
        component
    }

    /// Creates an algorithm component from a cipher finding
    ///
    /// The key size is inferred from the algorithm name. Severity, file and
    /// line are kept as `zero:` provenance and the location as evidence.
    pub fn cipher_finding(
        algorithm: &str,
        mode: Option<CipherMode>,
        severity: &str,
        description: &str,
        location: SourceLocation,
    ) -> Component {
        let key_size = CryptoClassifier::extract_key_size(algorithm);
        let mut component =
            Self::algorithm(algorithm, mode, key_size).with_description(description);

        component.add_provenance("severity", severity);
        Self::add_location(&mut component, location);
        component
    }

    /// Creates a TLS protocol component from a TLS finding
    pub fn tls_finding(
        finding_type: &str,
        version: &str,
        severity: &str,
        description: &str,
        location: SourceLocation,
    ) -> Component {
        let mut component =
            Self::protocol(ProtocolType::Tls, version).with_description(description);

        component
            .add_provenance("severity", severity)
            .add_provenance("finding_type", finding_type);
        Self::add_location(&mut component, location);
        component
    }

    /// Creates a certificate component with scanner provenance
    ///
    /// `zero:self_signed` is only present for self-signed certificates.
    pub fn certificate_info(certificate: &CertificateDescriptor) -> Component {
        let mut component = Self::certificate(certificate);
        let key_size = (certificate.key_size > 0)
            .then(|| certificate.key_size.to_string())
            .unwrap_or_default();

        component
            .add_provenance("key_type", certificate.key_type)
            .add_provenance("key_size", &key_size)
            .add_provenance("signature_algorithm", certificate.signature_algorithm)
            .add_provenance("file", certificate.file);
        if certificate.self_signed {
            component.add_provenance("self_signed", "true");
        }
        component
    }

    fn add_location(component: &mut Component, location: SourceLocation) {
        let line = location.line.filter(|l| *l > 0);
        component.add_provenance("file", location.file);
        if let Some(line) = line {
            component.add_provenance("line", &line.to_string());
        }
        component.add_occurrence(location.file, line);
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
