use crate::bom_generation::domain::Severity;

/// Finding categories with a known CWE, matched case-insensitively.
const CATEGORY_CWES: &[(&str, &str)] = &[
    ("pickle_rce", "CWE-502"),
    ("unsafe_loading", "CWE-502"),
    ("model_poisoning", "CWE-502"),
    ("api_key_exposure", "CWE-798"),
    ("prompt_injection", "CWE-94"),
];

/// SeverityPolicy maps scanner vocabulary onto CycloneDX vocabulary
///
/// Scanners disagree on severity spelling and on how they label finding
/// categories. These lookups never fail: anything unrecognised becomes
/// `unknown` severity or "no CWE".
pub struct SeverityPolicy;

impl SeverityPolicy {
    /// Normalizes a free-text severity
    ///
    /// # Arguments
    /// * `severity` - Severity as reported by a scanner, any case
    ///
    /// # Returns
    /// The matching CycloneDX severity, `Info` for "informational",
    /// otherwise `Unknown`
    ///
    /// # Examples
    /// ```
    /// use zero_bom::bom_generation::policies::SeverityPolicy;
    /// use zero_bom::bom_generation::domain::Severity;
    ///
    /// assert_eq!(SeverityPolicy::to_cyclonedx("HIGH"), Severity::High);
    /// assert_eq!(SeverityPolicy::to_cyclonedx("informational"), Severity::Info);
    /// assert_eq!(SeverityPolicy::to_cyclonedx("severe"), Severity::Unknown);
    /// ```
    pub fn to_cyclonedx(severity: &str) -> Severity {
        match severity.trim().to_lowercase().as_str() {
            "critical" => Severity::Critical,
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            "info" | "informational" => Severity::Info,
            "none" => Severity::None,
            _ => Severity::Unknown,
        }
    }

    /// Looks up the CWE identifier (`CWE-<n>`) of a finding category
    pub fn category_to_cwe(category: &str) -> Option<&'static str> {
        let category = category.trim().to_lowercase();
        CATEGORY_CWES
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, cwe)| *cwe)
    }

    /// Parses the numeric part of a CWE identifier
    ///
    /// Accepts `CWE-327`, `cwe-327` and a bare `327`. Trailing text after
    /// the digits is ignored. Zero and unparsable input yield `None`.
    pub fn cwe_to_int(cwe: &str) -> Option<u32> {
        let trimmed = cwe.trim();
        let number = match trimmed.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("cwe-") => &trimmed[4..],
            _ => trimmed,
        };
        let digits: String = number
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse::<u32>().ok().filter(|n| *n > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cyclonedx_passthrough() {
        assert_eq!(SeverityPolicy::to_cyclonedx("critical"), Severity::Critical);
        assert_eq!(SeverityPolicy::to_cyclonedx("High"), Severity::High);
        assert_eq!(SeverityPolicy::to_cyclonedx(" medium "), Severity::Medium);
        assert_eq!(SeverityPolicy::to_cyclonedx("LOW"), Severity::Low);
        assert_eq!(SeverityPolicy::to_cyclonedx("info"), Severity::Info);
        assert_eq!(SeverityPolicy::to_cyclonedx("none"), Severity::None);
    }

    #[test]
    fn test_to_cyclonedx_informational() {
        assert_eq!(SeverityPolicy::to_cyclonedx("Informational"), Severity::Info);
    }

    #[test]
    fn test_to_cyclonedx_unknown_values() {
        assert_eq!(SeverityPolicy::to_cyclonedx(""), Severity::Unknown);
        assert_eq!(SeverityPolicy::to_cyclonedx("warning"), Severity::Unknown);
        assert_eq!(SeverityPolicy::to_cyclonedx("unknown"), Severity::Unknown);
    }

    #[test]
    fn test_category_to_cwe() {
        assert_eq!(SeverityPolicy::category_to_cwe("pickle_rce"), Some("CWE-502"));
        assert_eq!(SeverityPolicy::category_to_cwe("unsafe_loading"), Some("CWE-502"));
        assert_eq!(SeverityPolicy::category_to_cwe("model_poisoning"), Some("CWE-502"));
        assert_eq!(SeverityPolicy::category_to_cwe("API_KEY_EXPOSURE"), Some("CWE-798"));
        assert_eq!(SeverityPolicy::category_to_cwe("prompt_injection"), Some("CWE-94"));
        assert_eq!(SeverityPolicy::category_to_cwe("bias"), None);
        assert_eq!(SeverityPolicy::category_to_cwe(""), None);
    }

    #[test]
    fn test_cwe_to_int() {
        assert_eq!(SeverityPolicy::cwe_to_int("CWE-327"), Some(327));
        assert_eq!(SeverityPolicy::cwe_to_int("cwe-94"), Some(94));
        assert_eq!(SeverityPolicy::cwe_to_int("798"), Some(798));
        assert_eq!(SeverityPolicy::cwe_to_int("CWE-321: Hard-coded key"), Some(321));
    }

    #[test]
    fn test_cwe_to_int_invalid() {
        assert_eq!(SeverityPolicy::cwe_to_int(""), None);
        assert_eq!(SeverityPolicy::cwe_to_int("CWE-"), None);
        assert_eq!(SeverityPolicy::cwe_to_int("CWE-0"), None);
        assert_eq!(SeverityPolicy::cwe_to_int("not a cwe"), None);
        assert_eq!(SeverityPolicy::cwe_to_int("CWÉ"), None);
        assert_eq!(SeverityPolicy::cwe_to_int("Cé-1"), None);
    }

    #[test]
    fn test_category_cwe_round_trip() {
        let cwe = SeverityPolicy::category_to_cwe("api_key_exposure");
        assert_eq!(cwe.and_then(SeverityPolicy::cwe_to_int), Some(798));
    }
}
