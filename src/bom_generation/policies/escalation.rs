use crate::bom_generation::domain::Severity;

/// Kind of CBOM finding subject to escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    Cipher,
    Tls,
    Key,
}

/// EscalationPolicy decides how a crypto finding is surfaced
///
/// A finding can be recorded as inventory (a component), as actionable
/// risk (a vulnerability), or both:
/// - cipher findings are always inventoried and become vulnerabilities
///   only at `high` or `critical`
/// - TLS findings are always both
/// - hardcoded keys are always vulnerabilities and never inventoried,
///   whatever severity the scanner reported
pub struct EscalationPolicy;

impl EscalationPolicy {
    pub fn emits_component(kind: FindingKind, _severity: Severity) -> bool {
        match kind {
            FindingKind::Cipher | FindingKind::Tls => true,
            FindingKind::Key => false,
        }
    }

    pub fn emits_vulnerability(kind: FindingKind, severity: Severity) -> bool {
        match kind {
            FindingKind::Cipher => severity.is_at_least(Severity::High),
            FindingKind::Tls | FindingKind::Key => true,
        }
    }
}
