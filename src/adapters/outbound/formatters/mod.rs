/// Formatter adapters for BOM output encodings
mod cyclonedx_json_formatter;

pub use cyclonedx_json_formatter::CycloneDxJsonFormatter;
