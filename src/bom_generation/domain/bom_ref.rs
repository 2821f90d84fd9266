use crate::bom_generation::domain::crypto::{algorithm_name, CipherMode, ProtocolType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Document-local identifier used for every cross-reference in a BOM.
///
/// A bom-ref is a logical foreign key, not a pointer: vulnerabilities,
/// certificates, keys and model cards address other components by the
/// string alone. Construction is deterministic, so the same category,
/// name and version (or size) always produce the same reference. Nothing
/// here enforces uniqueness across a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BomRef(String);

impl BomRef {
    /// Wraps an already formed reference without normalization.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// `crypto/algorithm/<name>[-<mode>][-<size>]`
    pub fn algorithm(algorithm: &str, mode: Option<CipherMode>, key_size: u32) -> Self {
        Self(format!(
            "crypto/algorithm/{}",
            normalize_segment(&algorithm_name(algorithm, mode, key_size))
        ))
    }

    /// `crypto/certificate/<subject>`
    pub fn certificate(subject: &str) -> Self {
        Self(format!("crypto/certificate/{}", normalize_segment(subject)))
    }

    /// `crypto/protocol/<type>@<version>`
    pub fn protocol(protocol_type: ProtocolType, version: &str) -> Self {
        Self(format!(
            "crypto/protocol/{}@{}",
            protocol_type.as_str(),
            normalize_segment(version)
        ))
    }

    /// `crypto/key/<algorithm>[@<size>]`, a size of 0 means unknown
    pub fn key(algorithm: &str, size: u32) -> Self {
        let algorithm = normalize_segment(algorithm);
        if size > 0 {
            Self(format!("crypto/key/{}@{}", algorithm, size))
        } else {
            Self(format!("crypto/key/{}", algorithm))
        }
    }

    /// `model/<name>@<version>`
    pub fn model(name: &str, version: &str) -> Self {
        Self(format!(
            "model/{}@{}",
            normalize_segment(name),
            normalize_segment(version)
        ))
    }

    /// `dataset/<name>`
    pub fn dataset(name: &str) -> Self {
        Self(format!("dataset/{}", normalize_segment(name)))
    }

    /// `framework/<name>@<version>`
    pub fn framework(name: &str, version: &str) -> Self {
        Self(format!(
            "framework/{}@{}",
            normalize_segment(name),
            normalize_segment(version)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BomRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BomRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BomRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for BomRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Trims, lower-cases and collapses whitespace runs into a single `-`.
pub fn normalize_segment(value: &str) -> String {
    value
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
