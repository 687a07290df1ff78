//! Rule-based pattern engine.
//!
//! The always-available detection tier: pure, total, no I/O, no suspension
//! points. Every analysis tests the full catalog so a single input can
//! accumulate violations across many groups.

use tracing::debug;

use crate::models::{AnalysisResult, Violation};
use crate::rules;
use crate::telemetry::CategoryCounts;

pub const RULE_ENGINE_SOURCE: &str = "rule_engine";
pub const RULE_ENGINE_ANALYZER: &str = "Rule-Based Pattern Library";

/// Evaluates text against the static rule catalog and produces a scored
/// result. The reliability backstop for the whole pipeline: it has no
/// error path.
#[derive(Debug, Default)]
pub struct PatternEngine;

impl PatternEngine {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a text against every rule in the catalog.
    ///
    /// No short-circuiting: all rules are tested even after a match, and no
    /// deduplication is applied when several rules hit the same span. The
    /// per-call counter delta is accumulated in the same pass and attached
    /// to the result for the aggregator to fold in.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let mut violations = Vec::new();
        let mut counts = CategoryCounts::default();

        for rule in rules::catalog() {
            if let Some(matched) = rule.pattern.find(text) {
                violations.push(Violation {
                    category: rule.category().as_str().to_string(),
                    severity: rule.severity,
                    confidence: rule.confidence,
                    kind: rule.kind.map(str::to_string),
                    evidence: Some(matched.as_str().to_string()),
                    description: Some(rule.description().to_string()),
                    tactics: None,
                    recommendation: None,
                });
                counts.bump(rule.group.bucket());
            }
        }

        let safety_score = Self::score(&violations);
        // Strict policy: any match at all marks the input unsafe
        let is_safe = violations.is_empty();

        debug!(
            violations = violations.len(),
            safety_score, "pattern analysis complete"
        );

        AnalysisResult {
            is_safe,
            safety_score,
            violations,
            source: RULE_ENGINE_SOURCE.to_string(),
            analyzer: RULE_ENGINE_ANALYZER.to_string(),
            stats: Some(counts),
            extra: serde_json::Map::new(),
        }
    }

    /// Additive severity deduction, floored at zero
    fn score(violations: &[Violation]) -> f64 {
        let deduction: f64 = violations.iter().map(|v| v.severity.weight()).sum();
        (1.0 - deduction).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn test_clean_text_is_safe() {
        let engine = PatternEngine::new();
        let result = engine.analyze("The weather today is sunny with a gentle breeze.");
        assert!(result.is_safe);
        assert_eq!(result.safety_score, 1.0);
        assert!(result.violations.is_empty());
        assert_eq!(result.source, "rule_engine");
        assert_eq!(result.analyzer, "Rule-Based Pattern Library");
        assert_eq!(result.stats.unwrap().total(), 0);
    }

    #[test]
    fn test_urgency_manipulation_detected() {
        let engine = PatternEngine::new();
        let result = engine.analyze("Buy now! Only 3 spots left, act immediately!");
        assert!(!result.is_safe);
        assert!(result
            .violations
            .iter()
            .any(|v| v.category == "manipulation" && v.severity >= Severity::High));
    }

    #[test]
    fn test_single_low_severity_match_marks_unsafe() {
        let engine = PatternEngine::new();
        let result = engine.analyze("What an idiot.");
        assert!(!result.is_safe);
        assert!((result.safety_score - 0.90).abs() < 1e-9);
    }

    #[test]
    fn test_critical_plus_low_scores_half() {
        let engine = PatternEngine::new();
        // "nigerian prince" is a critical classic-scam rule, "idiot" a low
        // profanity rule; deduction is 0.40 + 0.10
        let result = engine.analyze("A nigerian prince called me an idiot");
        assert_eq!(result.violations.len(), 2);
        assert!((result.safety_score - 0.50).abs() < 1e-9);
        assert!(!result.is_safe);
    }

    #[test]
    fn test_many_low_matches_floor_at_zero() {
        let engine = PatternEngine::new();
        // Enough distinct low/medium rules to stack past a 1.0 deduction
        let result = engine.analyze(
            "You damn stupid idiot moron, what dumb crap, go to hell you piss \
             bastard, hells bells",
        );
        assert!(!result.is_safe);
        assert_eq!(result.safety_score, 0.0);
    }

    #[test]
    fn test_evidence_is_first_matched_substring() {
        let engine = PatternEngine::new();
        let result = engine.analyze("time is running out, and time is running out again");
        let v = result
            .violations
            .iter()
            .find(|v| v.kind.as_deref() == Some("artificial_urgency"))
            .expect("urgency violation");
        assert_eq!(v.evidence.as_deref(), Some("time is running out"));
    }

    #[test]
    fn test_no_short_circuit_across_categories() {
        let engine = PatternEngine::new();
        let result = engine.analyze(
            "Act now before you miss out! Verify your account immediately, \
             you stupid person.",
        );
        let categories = result.categories();
        assert!(categories.contains(&"manipulation".to_string()));
        assert!(categories.contains(&"phishing".to_string()));
        assert!(categories.contains(&"profanity".to_string()));
    }

    #[test]
    fn test_stats_delta_matches_violations() {
        let engine = PatternEngine::new();
        let result = engine.analyze("Your account has been suspended. Verify your account now.");
        let stats = result.stats.clone().unwrap();
        assert_eq!(stats.total(), result.violations.len() as u64);
        assert!(stats.scam >= 2);
    }

    #[test]
    fn test_hebrew_profanity_detected() {
        let engine = PatternEngine::new();
        let result = engine.analyze("אתה אידיוט");
        assert!(!result.is_safe);
        assert!(result.violations.iter().any(|v| v.category == "profanity"));
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let engine = PatternEngine::new();
        let text = "Limited time offer! Everyone is buying this.";
        let a = engine.analyze(text);
        let b = engine.analyze(text);
        assert_eq!(a.safety_score, b.safety_score);
        assert_eq!(a.violations.len(), b.violations.len());
    }

    #[test]
    fn test_terminates_on_arbitrary_input() {
        let engine = PatternEngine::new();
        // Mixed scripts, control characters, long repetition
        let noisy = "ψ\u{0000}\u{202e}🙂".repeat(500);
        let result = engine.analyze(&noisy);
        assert!(result.safety_score >= 0.0 && result.safety_score <= 1.0);

        let empty = engine.analyze("");
        assert!(empty.is_safe);
    }
}
