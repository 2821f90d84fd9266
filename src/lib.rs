//! zero-bom - CycloneDX 1.6 CBOM and ML-BOM assembly
//!
//! This library turns the raw findings of cryptography and AI/ML scanners into
//! CycloneDX 1.6 documents: a Cryptography Bill of Materials (CBOM) and a
//! Machine-Learning Bill of Materials (ML-BOM). It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bom_generation`): CycloneDX document model, crypto
//!   classification and finding policies
//! - **Application Layer** (`application`): The export use case, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use zero_bom::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> Result<()> {
//! let exporter = BomExporter::new(
//!     CycloneDxJsonFormatter::pretty(),
//!     DirectoryWriter::new("."),
//!     StderrProgressReporter::new(),
//! );
//!
//! let findings = json!({
//!     "findings": {
//!         "ciphers": [{"algorithm": "DES", "severity": "high", "file": "legacy.go", "line": 12}]
//!     }
//! });
//!
//! let bom = exporter.export_cbom(findings.into())?;
//! exporter.write_cbom(&bom, BomKind::Cbom.default_filename())?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bom_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DirectoryWriter, FileSystemReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::CycloneDxJsonFormatter;
    pub use crate::application::dto::{BomKind, OutputStyle, RawScan};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::BomSummary;
    pub use crate::application::use_cases::BomExporter;
    pub use crate::bom_generation::domain::{
        Bom, BomRef, Component, ComponentType, ModelCard, Severity, Vulnerability,
    };
    pub use crate::bom_generation::services::{
        BomGenerator, ComponentFactory, CryptoClassifier, ReferenceIssue, ReferenceValidator,
    };
    pub use crate::ports::inbound::BomExportPort;
    pub use crate::ports::outbound::{
        BomFormatter, BomSink, FindingsReader, OutputPresenter, ProgressReporter,
        SilentProgressReporter,
    };
    pub use crate::shared::error::{BomError, ExitCode};
    pub use crate::shared::Result;
}
