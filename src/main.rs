mod cli;
mod config;
mod logging;

use cli::Args;
use config::ConfigFile;
use logging::DEFAULT_LOG_LEVEL;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, warn};
use zero_bom::prelude::*;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    match run(args) {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Effective settings after merging the config file and CLI flags.
#[derive(Debug)]
struct Settings {
    kind: BomKind,
    input: PathBuf,
    output_dir: PathBuf,
    filename: String,
    to_stdout: bool,
    style: OutputStyle,
    validate_refs: bool,
    fail_on: Option<Severity>,
}

impl Settings {
    /// CLI flags take precedence over config file values.
    fn merge(args: Args, config: &ConfigFile) -> Self {
        let configured_filename = match args.kind {
            BomKind::Cbom => config.cbom_filename.clone(),
            BomKind::Mlbom => config.mlbom_filename.clone(),
        };
        let compact = args.compact || config.compact.unwrap_or(false);

        Self {
            kind: args.kind,
            input: args.input,
            output_dir: args
                .output_dir
                .or_else(|| config.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from(".")),
            filename: args
                .filename
                .or(configured_filename)
                .unwrap_or_else(|| args.kind.default_filename().to_string()),
            to_stdout: args.stdout,
            style: if compact {
                OutputStyle::Compact
            } else {
                OutputStyle::Pretty
            },
            validate_refs: args.validate_refs || config.validate_references.unwrap_or(false),
            fail_on: args.fail_on.or_else(|| config.fail_on_severity()),
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => match config::discover_config(Path::new("."))? {
            Some(config) => {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
                config
            }
            None => ConfigFile::default(),
        },
    };

    logging::init_tracing(
        config.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL),
        config.log_format(),
    )?;
    config::warn_unknown_fields(&config);

    let settings = Settings::merge(args, &config);
    debug!(?settings, "Resolved settings");

    // Create adapters (Dependency Injection)
    let reader = FileSystemReader::new();
    let exporter = BomExporter::new(
        FormatterFactory::create(settings.style),
        DirectoryWriter::new(settings.output_dir.clone()),
        StderrProgressReporter::new(),
    );

    eprintln!(
        "🔍 Reading scanner findings from {}...",
        settings.input.display()
    );
    let raw = reader.read_findings(&settings.input)?;
    let bom = exporter.export(settings.kind, raw)?;

    let summary = BomSummary::from_bom(&bom);
    eprintln!("\n📊 {} summary\n{}\n", settings.kind.label(), summary);

    if settings.validate_refs {
        report_reference_issues(&bom);
    }

    eprintln!("{}", FormatterFactory::progress_message(settings.style));
    if settings.to_stdout {
        StdoutPresenter::new().present(&exporter.render(&bom)?)?;
    } else {
        let path = exporter.write(settings.kind, &bom, &settings.filename)?;
        eprintln!("✅ {} written to {}", settings.kind.label(), path.display());
    }

    match settings.fail_on {
        Some(threshold) if summary.exceeds(threshold) => {
            eprintln!(
                "\n⚠️  Vulnerabilities at or above '{}' severity found.",
                threshold
            );
            Ok(ExitCode::FindingsAboveThreshold)
        }
        _ => Ok(ExitCode::Success),
    }
}

fn report_reference_issues(bom: &Bom) {
    let issues = ReferenceValidator::validate(bom);
    if issues.is_empty() {
        eprintln!("🔗 All bom-refs resolve.");
        return;
    }

    eprintln!("🔗 {} bom-ref issue(s) found:", issues.len());
    for issue in &issues {
        warn!(%issue, "bom-ref validation issue");
        eprintln!("   - {}", issue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_merge_defaults() {
        let settings = Settings::merge(
            parse(&["zero-bom", "cbom", "-i", "crypto.json"]),
            &ConfigFile::default(),
        );

        assert_eq!(settings.kind, BomKind::Cbom);
        assert_eq!(settings.output_dir, PathBuf::from("."));
        assert_eq!(settings.filename, "cbom.cdx.json");
        assert_eq!(settings.style, OutputStyle::Pretty);
        assert!(!settings.to_stdout);
        assert!(!settings.validate_refs);
        assert!(settings.fail_on.is_none());
    }

    #[test]
    fn test_merge_uses_config_values() {
        let config = ConfigFile {
            output_dir: Some(PathBuf::from("reports")),
            mlbom_filename: Some("models.cdx.json".to_string()),
            cbom_filename: Some("crypto.cdx.json".to_string()),
            compact: Some(true),
            validate_references: Some(true),
            fail_on: Some("medium".to_string()),
            ..ConfigFile::default()
        };
        let settings = Settings::merge(parse(&["zero-bom", "mlbom", "-i", "tech.json"]), &config);

        assert_eq!(settings.output_dir, PathBuf::from("reports"));
        assert_eq!(settings.filename, "models.cdx.json");
        assert_eq!(settings.style, OutputStyle::Compact);
        assert!(settings.validate_refs);
        assert_eq!(settings.fail_on, Some(Severity::Medium));
    }

    #[test]
    fn test_merge_cli_overrides_config() {
        let config = ConfigFile {
            output_dir: Some(PathBuf::from("reports")),
            cbom_filename: Some("crypto.cdx.json".to_string()),
            fail_on: Some("low".to_string()),
            ..ConfigFile::default()
        };
        let settings = Settings::merge(
            parse(&[
                "zero-bom",
                "cbom",
                "-i",
                "crypto.json",
                "-o",
                "out",
                "-f",
                "mine.json",
                "--fail-on",
                "critical",
            ]),
            &config,
        );

        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert_eq!(settings.filename, "mine.json");
        assert_eq!(settings.fail_on, Some(Severity::Critical));
    }
}
