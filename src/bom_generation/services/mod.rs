mod architecture_classifier;
mod bom_generator;
mod component_factory;
mod crypto_classifier;
mod reference_validator;

pub use architecture_classifier::ArchitectureClassifier;
pub use bom_generator::{BomGenerator, TOOL_MANUFACTURER, TOOL_NAME};
pub use component_factory::{
    CertificateDescriptor, ComponentFactory, DatasetDescriptor, ModelDescriptor, SourceLocation,
};
pub use crypto_classifier::CryptoClassifier;
pub use reference_validator::{ReferenceIssue, ReferenceValidator};
