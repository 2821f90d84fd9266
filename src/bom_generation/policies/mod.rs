mod escalation;
mod severity;

pub use escalation::{EscalationPolicy, FindingKind};
pub use severity::SeverityPolicy;
