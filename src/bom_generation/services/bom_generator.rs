use crate::bom_generation::domain::{
    Bom, ComponentType, LifecyclePhase, Metadata, OrganizationalEntity, ToolComponent, Tools,
};
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

pub const TOOL_NAME: &str = "zero";
pub const TOOL_MANUFACTURER: &str = "Crash Override";

/// BomGenerator service for document skeletons
///
/// Creates the empty documents exports are assembled into: metadata with
/// a timestamp and the generating tool, plus a serial number and the
/// `discovery` lifecycle for CBOM and ML-BOM documents.
pub struct BomGenerator;

impl BomGenerator {
    /// Generates a document with metadata for the given tool
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool generating the BOM
    /// * `tool_version` - Version of the tool
    pub fn generate(tool_name: &str, tool_version: &str) -> Bom {
        let mut bom = Bom::new();
        bom.metadata = Some(Metadata {
            timestamp: Some(Self::timestamp()),
            tools: Some(Tools {
                components: vec![ToolComponent {
                    component_type: ComponentType::Application,
                    name: tool_name.to_string(),
                    version: Some(tool_version.to_string()),
                    manufacturer: Some(OrganizationalEntity::named(TOOL_MANUFACTURER)),
                }],
            }),
            ..Metadata::default()
        });
        bom
    }

    /// Generates a document with the default tool information
    ///
    /// This uses the compile-time version from Cargo.toml
    pub fn new_bom() -> Bom {
        Self::generate(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }

    /// Document skeleton for a cryptography BOM
    pub fn new_cbom() -> Bom {
        Self::discovery_bom()
    }

    /// Document skeleton for a machine-learning BOM
    pub fn new_mlbom() -> Bom {
        Self::discovery_bom()
    }

    /// Generates a unique `urn:uuid:` serial number
    pub fn serial_number() -> String {
        format!("urn:uuid:{}", Uuid::new_v4())
    }

    fn discovery_bom() -> Bom {
        let mut bom = Self::new_bom();
        bom.set_serial_number(Self::serial_number())
            .add_lifecycle(LifecyclePhase::Discovery);
        bom
    }

    fn timestamp() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let bom = BomGenerator::generate("test-tool", "1.0.0");
        let metadata = bom.metadata.unwrap();
        let tool = &metadata.tools.unwrap().components[0];

        assert_eq!(tool.name, "test-tool");
        assert_eq!(tool.version.as_deref(), Some("1.0.0"));
        assert_eq!(tool.component_type, ComponentType::Application);
        assert_eq!(
            tool.manufacturer.as_ref().map(|m| m.name.as_deref()),
            Some(Some("Crash Override"))
        );
        assert!(metadata.lifecycles.is_empty());
        assert!(bom.serial_number.is_none());
    }

    #[test]
    fn test_new_bom_uses_package_version() {
        let bom = BomGenerator::new_bom();
        let tools = bom.metadata.unwrap().tools.unwrap();
        assert_eq!(tools.components[0].name, "zero");
        assert_eq!(
            tools.components[0].version.as_deref(),
            Some(env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_timestamp_format() {
        let bom = BomGenerator::new_bom();
        let timestamp = bom.metadata.unwrap().timestamp.unwrap();

        // RFC 3339 with second precision in UTC
        assert!(timestamp.contains('T'));
        assert!(timestamp.ends_with('Z'));
        assert_eq!(timestamp.len(), "2024-01-01T00:00:00Z".len());
    }

    #[test]
    fn test_new_cbom_has_serial_and_discovery_lifecycle() {
        let bom = BomGenerator::new_cbom();
        let serial = bom.serial_number.as_deref().unwrap();
        assert!(serial.starts_with("urn:uuid:"));
        assert_eq!(serial.strip_prefix("urn:uuid:").unwrap().len(), 36);

        let metadata = bom.metadata.unwrap();
        assert_eq!(metadata.lifecycles.len(), 1);
        assert_eq!(metadata.lifecycles[0].phase, Some(LifecyclePhase::Discovery));
    }

    #[test]
    fn test_new_mlbom_unique_serial_numbers() {
        let first = BomGenerator::new_mlbom();
        let second = BomGenerator::new_mlbom();
        assert_ne!(first.serial_number, second.serial_number);
        assert_eq!(first.version, 1);
    }
}
