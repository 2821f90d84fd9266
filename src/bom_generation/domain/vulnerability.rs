use crate::bom_generation::domain::component::{Property, PROVENANCE_PREFIX};
use crate::bom_generation::domain::BomRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// CycloneDX severity vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
    None,
    Unknown,
}

impl Severity {
    /// Ordering used for thresholds; `Unknown` ranks lowest.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 6,
            Severity::High => 5,
            Severity::Medium => 4,
            Severity::Low => 3,
            Severity::Info => 2,
            Severity::None => 1,
            Severity::Unknown => 0,
        }
    }

    pub fn is_at_least(&self, threshold: Severity) -> bool {
        self.rank() >= threshold.rank()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Info => "info",
            Severity::None => "none",
            Severity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            "info" => Ok(Severity::Info),
            "none" => Ok(Severity::None),
            "unknown" => Ok(Severity::Unknown),
            _ => Err(format!(
                "Invalid severity: {}. Expected one of critical, high, medium, low, info, none, unknown",
                s
            )),
        }
    }
}

/// Scoring method of a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreMethod {
    #[serde(rename = "CVSSv2")]
    CvssV2,
    #[serde(rename = "CVSSv3")]
    CvssV3,
    #[serde(rename = "CVSSv31")]
    CvssV31,
    #[serde(rename = "CVSSv4")]
    CvssV4,
    #[serde(rename = "OWASP")]
    Owasp,
    #[serde(rename = "SSVC")]
    Ssvc,
    #[serde(rename = "other")]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilitySource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl VulnerabilitySource {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityReference {
    pub id: String,
    pub source: VulnerabilitySource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<VulnerabilitySource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<ScoreMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub url: String,
}

/// Reference from a vulnerability to the component it affects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affect {
    #[serde(rename = "ref")]
    pub bom_ref: BomRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<AffectedVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectedVersion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AffectedStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffectedStatus {
    Affected,
    Unaffected,
    Unknown,
}

/// VEX analysis state. Stored as data only; nothing here transitions it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisState {
    Resolved,
    ResolvedWithPedigree,
    Exploitable,
    InTriage,
    FalsePositive,
    NotAffected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justification {
    CodeNotPresent,
    CodeNotReachable,
    RequiresConfiguration,
    RequiresDependency,
    RequiresEnvironment,
    ProtectedByCompiler,
    ProtectedAtRuntime,
    ProtectedAtPerimeter,
    ProtectedByMitigatingControl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisResponse {
    CanNotFix,
    WillNotFix,
    Update,
    Rollback,
    WorkaroundAvailable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<AnalysisState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<Justification>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response: Vec<AnalysisResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_issued: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl Analysis {
    pub fn new(state: AnalysisState) -> Self {
        Self {
            state: Some(state),
            ..Self::default()
        }
    }

    /// `not_affected` together with the justification it requires.
    pub fn not_affected(justification: Justification) -> Self {
        Self {
            state: Some(AnalysisState::NotAffected),
            justification: Some(justification),
            ..Self::default()
        }
    }

    pub fn with_response(mut self, response: AnalysisResponse) -> Self {
        self.response.push(response);
        self
    }

    pub fn with_detail(mut self, detail: &str) -> Self {
        self.detail = Some(detail.to_string());
        self
    }

    /// A `not_affected` state without a justification.
    pub fn is_missing_justification(&self) -> bool {
        self.state == Some(AnalysisState::NotAffected) && self.justification.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<VulnerabilitySource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<VulnerabilityReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ratings: Vec<Rating>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cwes: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workaround: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisories: Vec<Advisory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affects: Vec<Affect>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
}

impl Vulnerability {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: None,
            references: Vec::new(),
            ratings: Vec::new(),
            cwes: Vec::new(),
            description: None,
            detail: None,
            recommendation: None,
            workaround: None,
            advisories: Vec::new(),
            created: None,
            published: None,
            updated: None,
            analysis: None,
            affects: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn with_source(mut self, name: &str) -> Self {
        self.source = Some(VulnerabilitySource::named(name));
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = non_empty(description);
        self
    }

    pub fn with_detail(mut self, detail: &str) -> Self {
        self.detail = non_empty(detail);
        self
    }

    pub fn with_recommendation(mut self, recommendation: &str) -> Self {
        self.recommendation = non_empty(recommendation);
        self
    }

    pub fn with_rating(mut self, severity: Severity, method: ScoreMethod) -> Self {
        self.ratings.push(Rating {
            severity: Some(severity),
            method: Some(method),
            ..Rating::default()
        });
        self
    }

    /// Adds a CWE id. `None` leaves the list untouched.
    pub fn with_cwe(mut self, cwe: Option<u32>) -> Self {
        if let Some(cwe) = cwe {
            self.cwes.push(cwe);
        }
        self
    }

    pub fn with_affect(mut self, bom_ref: BomRef) -> Self {
        self.affects.push(Affect {
            bom_ref,
            versions: Vec::new(),
        });
        self
    }

    pub fn with_analysis(mut self, analysis: Analysis) -> Self {
        self.analysis = Some(analysis);
        self
    }

    /// Adds a `zero:<key>` provenance property. Empty values are skipped.
    pub fn with_provenance(mut self, key: &str, value: &str) -> Self {
        if !value.trim().is_empty() {
            self.properties.push(Property {
                name: format!("{}{}", PROVENANCE_PREFIX, key),
                value: value.to_string(),
            });
        }
        self
    }

    /// Highest severity across all ratings.
    pub fn severity(&self) -> Severity {
        self.ratings
            .iter()
            .filter_map(|r| r.severity)
            .max_by_key(Severity::rank)
            .unwrap_or(Severity::Unknown)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
