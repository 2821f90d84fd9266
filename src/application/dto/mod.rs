/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod bom_kind;
mod output_style;
mod raw_findings;

pub use bom_kind::BomKind;
pub use output_style::OutputStyle;
pub use raw_findings::{Finding, FindingsDocument, RawScan};
