mod cbom;
mod mlbom;

use crate::application::dto::{BomKind, Finding, RawScan};
use crate::bom_generation::domain::{Bom, Vulnerability};
use crate::bom_generation::services::{BomGenerator, SourceLocation};
use crate::ports::inbound::BomExportPort;
use crate::ports::outbound::{BomFormatter, BomSink, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;
use cbom::CbomAssembler;
use mlbom::MlbomAssembler;
use std::path::PathBuf;
use tracing::{debug, info};

/// One named step of BOM assembly, run in declaration order.
type Section<A> = (&'static str, fn(&mut A, Finding<'_>, &mut Bom));

/// BomExporter - Core use case turning scanner findings into CycloneDX BOMs
///
/// Assembly is a pure function of the scanner output: every call starts
/// from a fresh BOM and keeps no state afterwards. Writing is a separate
/// step that serializes through the formatter and stores through the sink.
///
/// # Type Parameters
/// * `F` - BomFormatter implementation
/// * `S` - BomSink implementation
/// * `PR` - ProgressReporter implementation
pub struct BomExporter<F, S, PR> {
    formatter: F,
    sink: S,
    progress_reporter: PR,
}

impl<F, S, PR> BomExporter<F, S, PR>
where
    F: BomFormatter,
    S: BomSink,
    PR: ProgressReporter,
{
    /// Creates a new BomExporter with injected dependencies
    pub fn new(formatter: F, sink: S, progress_reporter: PR) -> Self {
        Self {
            formatter,
            sink,
            progress_reporter,
        }
    }

    fn assemble<A>(
        &self,
        kind: BomKind,
        findings: Finding<'_>,
        bom: &mut Bom,
        assembler: &mut A,
        sections: &[Section<A>],
    ) {
        let total = sections.len();
        for (index, &(name, assemble_section)) in sections.iter().enumerate() {
            let components = bom.components.len();
            let vulnerabilities = bom.vulnerabilities.len();

            assemble_section(assembler, findings, bom);

            debug!(
                bom = kind.label(),
                section = name,
                components = bom.components.len() - components,
                vulnerabilities = bom.vulnerabilities.len() - vulnerabilities,
                "Assembled section"
            );
            self.progress_reporter
                .report_progress(index + 1, total, Some(name));
        }

        self.progress_reporter.report_completion(&format!(
            "{} assembled: {} components, {} vulnerabilities",
            kind.label(),
            bom.components.len(),
            bom.vulnerabilities.len()
        ));
    }

    fn write_bom(&self, kind: BomKind, bom: &Bom, filename: &str) -> Result<PathBuf> {
        let content = self.render(bom)?;
        let path = self.sink.write(filename, &content)?;

        info!(
            bom = kind.label(),
            path = %path.display(),
            components = bom.components.len(),
            vulnerabilities = bom.vulnerabilities.len(),
            "Wrote BOM"
        );
        Ok(path)
    }
}

impl<F, S, PR> BomExportPort for BomExporter<F, S, PR>
where
    F: BomFormatter,
    S: BomSink,
    PR: ProgressReporter,
{
    fn export_cbom(&self, raw: RawScan) -> Result<Bom> {
        let document = raw
            .into_document()
            .context("failed to parse crypto result")?;

        let mut bom = BomGenerator::new_cbom();
        let mut assembler = CbomAssembler::default();
        self.assemble(
            BomKind::Cbom,
            document.findings(),
            &mut bom,
            &mut assembler,
            cbom::SECTIONS,
        );
        Ok(bom)
    }

    fn export_mlbom(&self, raw: RawScan) -> Result<Bom> {
        let document = raw
            .into_document()
            .context("failed to parse tech-id result")?;

        let mut bom = BomGenerator::new_mlbom();
        let mut assembler = MlbomAssembler::default();
        self.assemble(
            BomKind::Mlbom,
            document.findings(),
            &mut bom,
            &mut assembler,
            mlbom::SECTIONS,
        );
        Ok(bom)
    }

    fn write_cbom(&self, bom: &Bom, filename: &str) -> Result<PathBuf> {
        self.write_bom(BomKind::Cbom, bom, filename)
    }

    fn write_mlbom(&self, bom: &Bom, filename: &str) -> Result<PathBuf> {
        self.write_bom(BomKind::Mlbom, bom, filename)
    }

    fn render(&self, bom: &Bom) -> Result<String> {
        self.formatter.format(bom).context("failed to serialize BOM")
    }
}

/// Upper-cased, trimmed identifier segment for vulnerability ids.
fn id_segment(value: &str) -> String {
    value.trim().to_uppercase()
}

/// "Found in: <file>[:<line>]", or empty when the file is unknown.
fn found_in(location: SourceLocation) -> String {
    let file = location.file.trim();
    match location.line.filter(|line| *line > 0) {
        _ if file.is_empty() => String::new(),
        Some(line) => format!("Found in: {}:{}", file, line),
        None => format!("Found in: {}", file),
    }
}

/// Attaches scanner provenance (`zero:severity`, `zero:file`, `zero:line`).
fn with_scanner_provenance(
    vulnerability: Vulnerability,
    reported_severity: &str,
    location: SourceLocation,
) -> Vulnerability {
    let line = location
        .line
        .filter(|line| *line > 0)
        .map(|line| line.to_string())
        .unwrap_or_default();

    vulnerability
        .with_provenance("severity", reported_severity)
        .with_provenance("file", location.file)
        .with_provenance("line", &line)
}
