pub mod bom;
pub mod bom_ref;
pub mod component;
pub mod crypto;
pub mod data;
pub mod model_card;
pub mod organization;
pub mod vulnerability;

pub use bom::{
    Aggregate, Bom, Composition, Dependency, Lifecycle, LifecyclePhase, Metadata, ToolComponent,
    Tools,
};
pub use bom_ref::BomRef;
pub use component::{
    Component, ComponentPayload, ComponentType, ExternalReference, ExternalReferenceType,
    LicenseChoice, Property,
};
pub use crypto::{
    AlgorithmProperties, CertificateProperties, CipherMode, CryptoAsset, CryptoFunction,
    CryptoProperties, KeyMaterialType, KeyState, Primitive, ProtocolProperties, ProtocolType,
    RelatedCryptoMaterialProperties,
};
pub use data::{DataComponent, DataType};
pub use model_card::{ApproachType, ModelCard};
pub use organization::OrganizationalEntity;
pub use vulnerability::{
    Analysis, AnalysisResponse, AnalysisState, Justification, ScoreMethod, Severity,
    Vulnerability,
};
