//! Configuration file support for zero-bom.
//!
//! Provides YAML-based configuration through `zero-bom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::logging::LogFormat;
use zero_bom::prelude::{Result, Severity};

pub const CONFIG_FILENAME: &str = "zero-bom.config.yml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output_dir: Option<PathBuf>,
    pub cbom_filename: Option<String>,
    pub mlbom_filename: Option<String>,
    pub compact: Option<bool>,
    pub validate_references: Option<bool>,
    pub fail_on: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Threshold parsed from `fail_on`; only valid after validation.
    pub fn fail_on_severity(&self) -> Option<Severity> {
        self.fail_on.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to unit, not a mapping.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (field, value) in [
        ("cbom_filename", &config.cbom_filename),
        ("mlbom_filename", &config.mlbom_filename),
    ] {
        let Some(filename) = value else {
            continue;
        };
        if filename.trim().is_empty() {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default name, or set a file name such as \"bom.cdx.json\".",
                field
            );
        }
        if filename.contains('/') || filename.contains('\\') {
            bail!(
                "Invalid config: {} must be a plain file name, got '{}'.\n\n\
                 💡 Hint: Use output_dir to choose the directory the BOM is written into.",
                field,
                filename
            );
        }
    }

    if let Some(ref fail_on) = config.fail_on {
        if let Err(e) = fail_on.parse::<Severity>() {
            bail!("Invalid config: fail_on: {}", e);
        }
    }

    if let Some(ref level) = config.log_level {
        if !LOG_LEVELS.contains(&level.trim().to_lowercase().as_str()) {
            bail!(
                "Invalid config: log_level '{}' is not recognized.\n\n\
                 💡 Hint: Use one of {}.",
                level,
                LOG_LEVELS.join(", ")
            );
        }
    }

    if let Some(ref format) = config.log_format {
        if let Err(e) = format.parse::<LogFormat>() {
            bail!("Invalid config: log_format: {}", e);
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
/// Must run after logging is initialized.
pub fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "Unknown config field will be ignored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            "config.yml",
            r#"
output_dir: reports
cbom_filename: crypto.cdx.json
mlbom_filename: models.cdx.json
compact: true
validate_references: true
fail_on: HIGH
log_level: debug
log_format: json
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.output_dir, Some(PathBuf::from("reports")));
        assert_eq!(config.cbom_filename.as_deref(), Some("crypto.cdx.json"));
        assert_eq!(config.mlbom_filename.as_deref(), Some("models.cdx.json"));
        assert_eq!(config.compact, Some(true));
        assert_eq!(config.validate_references, Some(true));
        assert_eq!(config.fail_on_severity(), Some(Severity::High));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, CONFIG_FILENAME, "compact: false\n");

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().compact, Some(false));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "bad.yml", "invalid: yaml: [[[broken");

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_file_is_default_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "empty.yml", "\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.output_dir.is_none());
        assert!(config.fail_on.is_none());
        assert_eq!(config.log_format(), LogFormat::Compact);
    }

    #[test]
    fn test_empty_filename_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "cbom_filename: \"  \"\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("cbom_filename must not be empty"));
        assert!(err.contains("💡 Hint:"));
    }

    #[test]
    fn test_filename_with_separator_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "mlbom_filename: ../models.json\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("mlbom_filename must be a plain file name"));
    }

    #[test]
    fn test_invalid_fail_on_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "fail_on: severe\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("fail_on"));
        assert!(err.contains("Invalid severity"));
    }

    #[test]
    fn test_invalid_log_level_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "log_level: loud\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("log_level 'loud' is not recognized"));
    }

    #[test]
    fn test_invalid_log_format_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "log_format: xml\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid log format"));
    }

    #[test]
    fn test_unknown_fields_are_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            "config.yml",
            r#"
compact: true
unknown_field: some_value
another_unknown: 42
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.compact, Some(true));
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.output_dir.is_none());
        assert!(config.cbom_filename.is_none());
        assert!(config.mlbom_filename.is_none());
        assert!(config.compact.is_none());
        assert!(config.validate_references.is_none());
        assert!(config.fail_on_severity().is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
