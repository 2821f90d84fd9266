//! CBOM payload: the `cryptoProperties` object of a cryptographic-asset component.
//!
//! CycloneDX encodes the asset kind as a sibling `assetType` string next to
//! four optional property objects. Here the kind and its properties are a
//! single enum, so exactly one property block exists and it always matches
//! the discriminator.

use crate::bom_generation::domain::BomRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoProperties {
    #[serde(flatten)]
    pub asset: CryptoAsset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oid: Option<String>,
}

impl CryptoProperties {
    pub fn new(asset: CryptoAsset) -> Self {
        Self { asset, oid: None }
    }

    pub fn with_oid(mut self, oid: Option<&str>) -> Self {
        self.oid = oid.filter(|o| !o.is_empty()).map(str::to_string);
        self
    }

    pub fn asset_type(&self) -> &'static str {
        self.asset.asset_type()
    }

    pub fn algorithm(&self) -> Option<&AlgorithmProperties> {
        match &self.asset {
            CryptoAsset::Algorithm { properties } => Some(properties),
            _ => None,
        }
    }

    pub fn certificate(&self) -> Option<&CertificateProperties> {
        match &self.asset {
            CryptoAsset::Certificate { properties } => Some(properties),
            _ => None,
        }
    }

    pub fn protocol(&self) -> Option<&ProtocolProperties> {
        match &self.asset {
            CryptoAsset::Protocol { properties } => Some(properties),
            _ => None,
        }
    }

    pub fn related_crypto_material(&self) -> Option<&RelatedCryptoMaterialProperties> {
        match &self.asset {
            CryptoAsset::RelatedCryptoMaterial { properties } => Some(properties),
            _ => None,
        }
    }
}

/// Asset kind together with its property block, tagged by `assetType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "assetType", rename_all = "kebab-case")]
pub enum CryptoAsset {
    Algorithm {
        #[serde(rename = "algorithmProperties")]
        properties: AlgorithmProperties,
    },
    Certificate {
        #[serde(rename = "certificateProperties")]
        properties: CertificateProperties,
    },
    Protocol {
        #[serde(rename = "protocolProperties")]
        properties: ProtocolProperties,
    },
    RelatedCryptoMaterial {
        #[serde(rename = "relatedCryptoMaterialProperties")]
        properties: RelatedCryptoMaterialProperties,
    },
}

impl CryptoAsset {
    pub fn asset_type(&self) -> &'static str {
        match self {
            CryptoAsset::Algorithm { .. } => "algorithm",
            CryptoAsset::Certificate { .. } => "certificate",
            CryptoAsset::Protocol { .. } => "protocol",
            CryptoAsset::RelatedCryptoMaterial { .. } => "related-crypto-material",
        }
    }
}

/// Operation class of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    /// Authenticated encryption (also the default for bare cipher names)
    Ae,
    Mac,
    Hash,
    /// Public key encryption
    Pke,
    /// Key encapsulation mechanism
    Kem,
    /// Digital signature
    Dsa,
    /// Extendable output function
    Xof,
    /// Key derivation function
    Kdf,
    Other,
}

impl Primitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Ae => "ae",
            Primitive::Mac => "mac",
            Primitive::Hash => "hash",
            Primitive::Pke => "pke",
            Primitive::Kem => "kem",
            Primitive::Dsa => "dsa",
            Primitive::Xof => "xof",
            Primitive::Kdf => "kdf",
            Primitive::Other => "other",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CryptoFunction {
    Generate,
    Keygen,
    Encrypt,
    Decrypt,
    Digest,
    Tag,
    Keyderive,
    Sign,
    Verify,
    Encapsulate,
    Decapsulate,
    Other,
    Unknown,
}

/// Block cipher mode of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherMode {
    Cbc,
    Ecb,
    Ccm,
    Gcm,
    Cfb,
    Ofb,
    Ctr,
    Other,
    Unknown,
}

impl CipherMode {
    /// Modes recognised in free text, in detection order.
    pub const DETECTABLE: [CipherMode; 7] = [
        CipherMode::Gcm,
        CipherMode::Cbc,
        CipherMode::Ctr,
        CipherMode::Ecb,
        CipherMode::Cfb,
        CipherMode::Ofb,
        CipherMode::Ccm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CipherMode::Cbc => "cbc",
            CipherMode::Ecb => "ecb",
            CipherMode::Ccm => "ccm",
            CipherMode::Gcm => "gcm",
            CipherMode::Cfb => "cfb",
            CipherMode::Ofb => "ofb",
            CipherMode::Ctr => "ctr",
            CipherMode::Other => "other",
            CipherMode::Unknown => "unknown",
        }
    }
}

impl FromStr for CipherMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cbc" => Ok(CipherMode::Cbc),
            "ecb" => Ok(CipherMode::Ecb),
            "ccm" => Ok(CipherMode::Ccm),
            "gcm" => Ok(CipherMode::Gcm),
            "cfb" => Ok(CipherMode::Cfb),
            "ofb" => Ok(CipherMode::Ofb),
            "ctr" => Ok(CipherMode::Ctr),
            "other" => Ok(CipherMode::Other),
            "unknown" => Ok(CipherMode::Unknown),
            _ => Err(format!("Invalid cipher mode: {}", s)),
        }
    }
}

/// Display name of an algorithm asset: `<algorithm>[-<MODE>][-<size>]`.
///
/// Mode and size are only appended when the algorithm text does not
/// already name them, so "AES-256-GCM" stays as it is.
pub fn algorithm_name(algorithm: &str, mode: Option<CipherMode>, key_size: u32) -> String {
    let mut name = algorithm.trim().to_string();
    if let Some(mode) = mode {
        if !mentions(&name, mode.as_str()) {
            name = format!("{}-{}", name, mode.as_str().to_uppercase());
        }
    }
    if key_size > 0 {
        let size = key_size.to_string();
        if !mentions(&name, &size) {
            name = format!("{}-{}", name, size);
        }
    }
    name
}

fn mentions(name: &str, part: &str) -> bool {
    let lower = name.to_lowercase();
    let numeric = part.bytes().all(|b| b.is_ascii_digit());
    lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .any(|token| token == part || (numeric && contains_number(token, part)))
        || (!numeric && lower.ends_with(part))
}

/// True when `number` appears in `token` without adjacent digits, so
/// "aes128cbc" contains 128 but "aes1280" does not.
fn contains_number(token: &str, number: &str) -> bool {
    token.match_indices(number).any(|(start, _)| {
        let end = start + number.len();
        let before = token[..start].bytes().next_back();
        let after = token[end..].bytes().next();
        !before.is_some_and(|b| b.is_ascii_digit()) && !after.is_some_and(|b| b.is_ascii_digit())
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmProperties {
    pub primitive: Primitive,
    /// Key or digest size in bits, omitted when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_set_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<CipherMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_platform: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certification_level: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crypto_functions: Vec<CryptoFunction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classical_security_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nist_quantum_security_level: Option<u8>,
}

impl AlgorithmProperties {
    pub fn new(primitive: Primitive) -> Self {
        Self {
            primitive,
            parameter_set_identifier: None,
            mode: None,
            execution_environment: None,
            implementation_platform: None,
            certification_level: Vec::new(),
            crypto_functions: Vec::new(),
            classical_security_level: None,
            nist_quantum_security_level: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_valid_before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_valid_after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_algorithm_ref: Option<BomRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_public_key_ref: Option<BomRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_extension: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolType {
    Tls,
    Ssh,
    Ipsec,
    Ikev2,
    Sstp,
    Wpa,
    Other,
    Unknown,
}

impl ProtocolType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolType::Tls => "tls",
            ProtocolType::Ssh => "ssh",
            ProtocolType::Ipsec => "ipsec",
            ProtocolType::Ikev2 => "ikev2",
            ProtocolType::Sstp => "sstp",
            ProtocolType::Wpa => "wpa",
            ProtocolType::Other => "other",
            ProtocolType::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolProperties {
    #[serde(rename = "type")]
    pub protocol_type: ProtocolType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cipher_suites: Vec<CipherSuite>,
    /// Certificates and keys used by the protocol
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub crypto_ref_array: Vec<BomRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CipherSuite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub algorithms: Vec<BomRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyMaterialType {
    PrivateKey,
    PublicKey,
    SecretKey,
    Key,
    Password,
    Credential,
    Token,
    Other,
    Unknown,
}

impl KeyMaterialType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyMaterialType::PrivateKey => "private-key",
            KeyMaterialType::PublicKey => "public-key",
            KeyMaterialType::SecretKey => "secret-key",
            KeyMaterialType::Key => "key",
            KeyMaterialType::Password => "password",
            KeyMaterialType::Credential => "credential",
            KeyMaterialType::Token => "token",
            KeyMaterialType::Other => "other",
            KeyMaterialType::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyState {
    PreActivation,
    Active,
    Suspended,
    Deactivated,
    Compromised,
    Destroyed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedCryptoMaterialProperties {
    #[serde(rename = "type")]
    pub material_type: KeyMaterialType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<KeyState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_ref: Option<BomRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secured_by: Option<SecuredBy>,
}

/// Protection mechanism of key material (software, HSM, TPM, TEE).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuredBy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm_ref: Option<BomRef>,
}
