/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_output_settings() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("reports")).unwrap();
        write_config(
            &dir.path().join("zero-bom.config.yml"),
            r#"
output_dir: reports
cbom_filename: crypto.cdx.json
compact: true
"#,
        );

        let output = cargo_bin_cmd!("zero-bom")
            .current_dir(dir.path())
            .arg("cbom")
            .arg("--input")
            .arg(fixture("crypto-findings.json"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));

        let written = fs::read_to_string(dir.path().join("reports/crypto.cdx.json")).unwrap();
        assert_eq!(written.trim_end().lines().count(), 1);
    }

    #[test]
    fn test_auto_discovery_applies_fail_on() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("zero-bom.config.yml"), "fail_on: high\n");

        cargo_bin_cmd!("zero-bom")
            .current_dir(dir.path())
            .arg("cbom")
            .arg("--input")
            .arg(fixture("crypto-findings.json"))
            .arg("--stdout")
            .assert()
            .code(1);
    }

    #[test]
    fn test_no_config_file_runs_normally() {
        let dir = TempDir::new().unwrap();

        let output = cargo_bin_cmd!("zero-bom")
            .current_dir(dir.path())
            .arg("mlbom")
            .arg("--input")
            .arg(fixture("ml-findings.json"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Auto-discovered config file"));
        assert!(dir.path().join("mlbom.cdx.json").exists());
    }
}

// ============================================================================
// Explicit Config Path Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(
            &config_path,
            &format!(
                "output_dir: {}\nmlbom_filename: models.cdx.json\n",
                out.path().display()
            ),
        );

        cargo_bin_cmd!("zero-bom")
            .arg("mlbom")
            .arg("--input")
            .arg(fixture("ml-findings.json"))
            .arg("--config")
            .arg(&config_path)
            .assert()
            .success();

        assert!(out.path().join("models.cdx.json").exists());
    }

    #[test]
    fn test_explicit_config_enables_reference_validation() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "validate_references: true\n");

        cargo_bin_cmd!("zero-bom")
            .arg("cbom")
            .arg("--input")
            .arg(fixture("crypto-findings.json"))
            .arg("--stdout")
            .arg("--config")
            .arg(&config_path)
            .assert()
            .success()
            .stderr(predicate::str::contains("All bom-refs resolve"));
    }

    #[test]
    fn test_unknown_config_field_is_warned_about() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, "format: markdown\n");

        cargo_bin_cmd!("zero-bom")
            .arg("cbom")
            .arg("--input")
            .arg(fixture("crypto-findings.json"))
            .arg("--stdout")
            .arg("--config")
            .arg(&config_path)
            .assert()
            .success()
            .stderr(predicate::str::contains("Unknown config field"))
            .stderr(predicate::str::contains("format"));
    }
}

// ============================================================================
// CLI / Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_filename_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("zero-bom.config.yml"),
            "cbom_filename: from-config.json\n",
        );

        cargo_bin_cmd!("zero-bom")
            .current_dir(dir.path())
            .arg("cbom")
            .arg("--input")
            .arg(fixture("crypto-findings.json"))
            .args(["--filename", "from-cli.json"])
            .assert()
            .success();

        assert!(dir.path().join("from-cli.json").exists());
        assert!(!dir.path().join("from-config.json").exists());
    }

    #[test]
    fn test_cli_fail_on_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("zero-bom.config.yml"), "fail_on: low\n");

        // Config alone would fail on the medium security finding
        cargo_bin_cmd!("zero-bom")
            .current_dir(dir.path())
            .arg("mlbom")
            .arg("--input")
            .arg(fixture("ml-findings.json"))
            .args(["--stdout", "--fail-on", "critical"])
            .assert()
            .code(0);
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_invalid_yaml_syntax_error() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("zero-bom.config.yml"),
            "invalid: yaml: [[[broken",
        );

        cargo_bin_cmd!("zero-bom")
            .current_dir(dir.path())
            .arg("cbom")
            .arg("--input")
            .arg(fixture("crypto-findings.json"))
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_explicit_config_not_found_error() {
        cargo_bin_cmd!("zero-bom")
            .arg("cbom")
            .arg("--input")
            .arg(fixture("crypto-findings.json"))
            .args(["--config", "/nonexistent/zero-bom.config.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_fail_on_in_config_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir.path().join("zero-bom.config.yml"), "fail_on: severe\n");

        cargo_bin_cmd!("zero-bom")
            .current_dir(dir.path())
            .arg("cbom")
            .arg("--input")
            .arg(fixture("crypto-findings.json"))
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid severity"));
    }

    #[test]
    fn test_filename_with_directory_in_config_error() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("zero-bom.config.yml"),
            "mlbom_filename: nested/mlbom.json\n",
        );

        cargo_bin_cmd!("zero-bom")
            .current_dir(dir.path())
            .arg("mlbom")
            .arg("--input")
            .arg(fixture("ml-findings.json"))
            .assert()
            .code(3)
            .stderr(predicate::str::contains("must be a plain file name"));
    }
}
