//! Summary read model for assembled BOMs
//!
//! Counts what an export produced so the CLI can report it and decide
//! on a `--fail-on` threshold without walking the document again.

use crate::bom_generation::domain::{Bom, Severity};
use std::collections::BTreeMap;
use std::fmt;

/// Severities from most to least severe.
const SEVERITY_ORDER: [Severity; 7] = [
    Severity::Critical,
    Severity::High,
    Severity::Medium,
    Severity::Low,
    Severity::Info,
    Severity::None,
    Severity::Unknown,
];

/// Number of vulnerabilities rated at one severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityCount {
    pub severity: Severity,
    pub count: usize,
}

/// Query-optimized view of an assembled BOM
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BomSummary {
    /// Serial number of the document, if any
    pub serial_number: Option<String>,
    /// Total number of components
    pub component_count: usize,
    /// Components per CycloneDX component type
    pub components_by_type: BTreeMap<String, usize>,
    /// Cryptographic assets per asset type (algorithm, certificate, ...)
    pub crypto_assets_by_type: BTreeMap<String, usize>,
    /// Vulnerabilities per severity, most severe first, zero counts omitted
    pub vulnerabilities_by_severity: Vec<SeverityCount>,
}

impl BomSummary {
    /// Builds the summary of a BOM
    ///
    /// # Examples
    /// ```
    /// use zero_bom::application::read_models::BomSummary;
    /// use zero_bom::bom_generation::domain::{Bom, Severity, Vulnerability, ScoreMethod};
    ///
    /// let mut bom = Bom::new();
    /// bom.add_vulnerability(Vulnerability::new("X").with_rating(Severity::High, ScoreMethod::Other));
    ///
    /// let summary = BomSummary::from_bom(&bom);
    /// assert_eq!(summary.highest_severity(), Some(Severity::High));
    /// ```
    pub fn from_bom(bom: &Bom) -> Self {
        let mut components_by_type = BTreeMap::new();
        let mut crypto_assets_by_type = BTreeMap::new();
        for component in &bom.components {
            *components_by_type
                .entry(component.component_type.as_str().to_string())
                .or_insert(0) += 1;
            if let Some(crypto) = component.crypto_properties() {
                *crypto_assets_by_type
                    .entry(crypto.asset_type().to_string())
                    .or_insert(0) += 1;
            }
        }

        let vulnerabilities_by_severity = SEVERITY_ORDER
            .iter()
            .map(|severity| SeverityCount {
                severity: *severity,
                count: bom
                    .vulnerabilities
                    .iter()
                    .filter(|v| v.severity() == *severity)
                    .count(),
            })
            .filter(|entry| entry.count > 0)
            .collect();

        Self {
            serial_number: bom.serial_number.clone(),
            component_count: bom.components.len(),
            components_by_type,
            crypto_assets_by_type,
            vulnerabilities_by_severity,
        }
    }

    pub fn vulnerability_count(&self) -> usize {
        self.vulnerabilities_by_severity.iter().map(|e| e.count).sum()
    }

    /// Most severe rating present, None without vulnerabilities.
    pub fn highest_severity(&self) -> Option<Severity> {
        self.vulnerabilities_by_severity.first().map(|e| e.severity)
    }

    /// True when any vulnerability is rated at or above `threshold`.
    pub fn exceeds(&self, threshold: Severity) -> bool {
        self.highest_severity()
            .is_some_and(|severity| severity.is_at_least(threshold))
    }
}

impl fmt::Display for BomSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Components: {}", self.component_count)?;
        for (component_type, count) in &self.components_by_type {
            writeln!(f, "  {}: {}", component_type, count)?;
        }
        if !self.crypto_assets_by_type.is_empty() {
            writeln!(f, "Crypto assets:")?;
            for (asset_type, count) in &self.crypto_assets_by_type {
                writeln!(f, "  {}: {}", asset_type, count)?;
            }
        }
        write!(f, "Vulnerabilities: {}", self.vulnerability_count())?;
        for entry in &self.vulnerabilities_by_severity {
            write!(f, "\n  {}: {}", entry.severity, entry.count)?;
        }
        Ok(())
    }
}
