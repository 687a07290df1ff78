use serde::{Deserialize, Serialize};

use crate::telemetry::CategoryCounts;

/// Severity of a detected violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Mild concern, low scoring impact
    Low,
    /// Noticeable concern
    Medium,
    /// Serious concern
    High,
    /// Severe concern, dominates the score
    Critical,
}

impl Severity {
    /// Fixed score deduction per violation of this severity.
    ///
    /// Deductions are additive, not multiplicative: enough low-severity
    /// matches can drive a score all the way to zero.
    pub fn weight(&self) -> f64 {
        match self {
            Severity::Low => 0.10,
            Severity::Medium => 0.15,
            Severity::High => 0.25,
            Severity::Critical => 0.40,
        }
    }

    /// Get a description of the severity level
    pub fn description(&self) -> &'static str {
        match self {
            Severity::Low => "Minor concern",
            Severity::Medium => "Moderate concern",
            Severity::High => "Serious concern",
            Severity::Critical => "Severe concern",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// A single detected instance of a rule (or provider finding) matching
/// the analyzed text.
///
/// `category` is a free string: locally produced violations use the coarse
/// catalog categories, while provider-sourced violations may carry labels
/// outside that set (e.g. "sales_manipulation"). Violations are never
/// deduplicated, even when several rules match the same span.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub category: String,
    pub severity: Severity,
    pub confidence: f64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub evidence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tactics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub recommendation: Option<String>,
}

/// Outcome of one safety analysis, regardless of which tier produced it.
///
/// For the rule engine, `is_safe == violations.is_empty()` always holds.
/// Provider-sourced results assert `is_safe` themselves but are validated
/// for the same consistency before being returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub is_safe: bool,
    pub safety_score: f64,
    pub violations: Vec<Violation>,
    /// Analyzer identity tag, e.g. "rule_engine" or "gemini_api"
    pub source: String,
    /// Human-readable analyzer label
    pub analyzer: String,
    /// Per-call category counter deltas (rule engine only)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stats: Option<CategoryCounts>,
    /// Extra provider-reported fields, carried through untouched.
    /// An empty map flattens to nothing on serialization.
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AnalysisResult {
    /// A clean result with no violations, tagged for the given analyzer
    pub fn safe(source: &str, analyzer: &str) -> Self {
        Self {
            is_safe: true,
            safety_score: 1.0,
            violations: Vec::new(),
            source: source.to_string(),
            analyzer: analyzer.to_string(),
            stats: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Highest severity present across violations, if any
    pub fn highest_severity(&self) -> Option<Severity> {
        self.violations.iter().map(|v| v.severity).max()
    }

    /// Distinct categories touched, in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for v in &self.violations {
            if !seen.contains(&v.category) {
                seen.push(v.category.clone());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(category: &str, severity: Severity) -> Violation {
        Violation {
            category: category.to_string(),
            severity,
            confidence: 0.9,
            kind: None,
            evidence: None,
            description: None,
            tactics: None,
            recommendation: None,
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_severity_weights() {
        assert_eq!(Severity::Critical.weight(), 0.40);
        assert_eq!(Severity::High.weight(), 0.25);
        assert_eq!(Severity::Medium.weight(), 0.15);
        assert_eq!(Severity::Low.weight(), 0.10);
    }

    #[test]
    fn test_severity_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Critical).unwrap(), "\"critical\"");
        let parsed: Severity = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, Severity::High);
    }

    #[test]
    fn test_highest_severity() {
        let mut result = AnalysisResult::safe("rule_engine", "Rule-Based Pattern Library");
        assert_eq!(result.highest_severity(), None);

        result.violations.push(violation("manipulation", Severity::Medium));
        result.violations.push(violation("phishing", Severity::Critical));
        result.violations.push(violation("profanity", Severity::Low));
        assert_eq!(result.highest_severity(), Some(Severity::Critical));
    }

    #[test]
    fn test_categories_distinct_in_order() {
        let mut result = AnalysisResult::safe("rule_engine", "Rule-Based Pattern Library");
        result.violations.push(violation("manipulation", Severity::Medium));
        result.violations.push(violation("phishing", Severity::High));
        result.violations.push(violation("manipulation", Severity::Low));
        assert_eq!(result.categories(), vec!["manipulation", "phishing"]);
    }

    #[test]
    fn test_violation_type_field_name() {
        let mut v = violation("scam", Severity::High);
        v.kind = Some("advance_fee_fraud".to_string());
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["type"], "advance_fee_fraud");
        assert!(json.get("kind").is_none());
        // None options are skipped entirely
        assert!(json.get("evidence").is_none());
    }

    #[test]
    fn test_result_roundtrip_preserves_shape() {
        let mut result = AnalysisResult::safe("gemini_api", "Gemini Pro");
        result.is_safe = false;
        result.safety_score = 0.5;
        result.violations.push(violation("phishing", Severity::Critical));

        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert!(!back.is_safe);
        assert_eq!(back.safety_score, 0.5);
        assert_eq!(back.violations.len(), 1);
        assert_eq!(back.source, "gemini_api");
    }
}
