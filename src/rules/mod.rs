//! Declarative detection rule catalog.
//!
//! Rules are grouped into fine-grained [`RuleGroup`]s which map onto the
//! coarse reporting [`Category`] set. The table is built once at first use
//! and never mutated.

mod catalog;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::Severity;
use crate::telemetry::Bucket;

/// Coarse grouping of related rules, used for reporting rather than matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Profanity,
    Misinformation,
    Manipulation,
    Phishing,
    Scam,
    DangerousContent,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Profanity => "profanity",
            Category::Misinformation => "misinformation",
            Category::Manipulation => "manipulation",
            Category::Phishing => "phishing",
            Category::Scam => "scam",
            Category::DangerousContent => "dangerous_content",
        }
    }

    /// Get the reporting description attached to violations in this category
    pub fn description(&self) -> &'static str {
        match self {
            Category::Profanity => "Offensive or inappropriate language detected",
            Category::Misinformation => "Potentially misleading or false information",
            Category::Manipulation => "Manipulative language or pressure tactics",
            Category::Phishing => "Potential phishing or credential theft attempt",
            Category::Scam => "Possible scam or fraudulent scheme",
            Category::DangerousContent => "Dangerous or illegal content detected",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fine-grained rule grouping. Determines both the reported category and
/// the telemetry bucket a match counts toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleGroup {
    ProfanityHebrew,
    ProfanityEnglish,
    MisleadingHealth,
    MisleadingFinancial,
    MisleadingConspiracy,
    ManipulationUrgency,
    ManipulationEmotional,
    ManipulationSocial,
    ScamPhishing,
    ScamImpersonation,
    DangerousViolence,
    DangerousSelfHarm,
    DangerousIllegal,
}

impl RuleGroup {
    /// Coarse category this group reports as.
    ///
    /// Financial misinformation reads as a scam to end users, and both scam
    /// groups present as phishing; the mapping is intentionally not 1:1 with
    /// the group names.
    pub fn category(&self) -> Category {
        match self {
            RuleGroup::ProfanityHebrew | RuleGroup::ProfanityEnglish => Category::Profanity,
            RuleGroup::MisleadingHealth | RuleGroup::MisleadingConspiracy => {
                Category::Misinformation
            }
            RuleGroup::MisleadingFinancial => Category::Scam,
            RuleGroup::ManipulationUrgency
            | RuleGroup::ManipulationEmotional
            | RuleGroup::ManipulationSocial => Category::Manipulation,
            RuleGroup::ScamPhishing | RuleGroup::ScamImpersonation => Category::Phishing,
            RuleGroup::DangerousViolence
            | RuleGroup::DangerousSelfHarm
            | RuleGroup::DangerousIllegal => Category::DangerousContent,
        }
    }

    /// Telemetry bucket a match in this group counts toward. Keyed by group,
    /// not reported category: financial misinformation counts as misleading
    /// even though it reports as scam.
    pub fn bucket(&self) -> Bucket {
        match self {
            RuleGroup::ProfanityHebrew | RuleGroup::ProfanityEnglish => Bucket::Profanity,
            RuleGroup::MisleadingHealth
            | RuleGroup::MisleadingFinancial
            | RuleGroup::MisleadingConspiracy => Bucket::Misleading,
            RuleGroup::ManipulationUrgency
            | RuleGroup::ManipulationEmotional
            | RuleGroup::ManipulationSocial => Bucket::Manipulation,
            RuleGroup::ScamPhishing | RuleGroup::ScamImpersonation => Bucket::Scam,
            RuleGroup::DangerousViolence
            | RuleGroup::DangerousSelfHarm
            | RuleGroup::DangerousIllegal => Bucket::Dangerous,
        }
    }
}

/// A single pattern-matching detection unit
pub struct Rule {
    pub pattern: Regex,
    pub group: RuleGroup,
    pub severity: Severity,
    pub confidence: f64,
    /// Optional fine-grained tag, e.g. "advance_fee_fraud"
    pub kind: Option<&'static str>,
}

impl Rule {
    fn new(
        group: RuleGroup,
        pattern: &str,
        severity: Severity,
        confidence: f64,
        kind: Option<&'static str>,
    ) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Invalid rule pattern"),
            group,
            severity,
            confidence,
            kind,
        }
    }

    pub fn category(&self) -> Category {
        self.group.category()
    }

    pub fn description(&self) -> &'static str {
        self.group.category().description()
    }
}

static CATALOG: Lazy<Vec<Rule>> = Lazy::new(catalog::build_catalog);

/// The full, immutable rule table. Built once at first use.
pub fn catalog() -> &'static [Rule] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_builds_and_is_nonempty() {
        // Forces every pattern in the table through the regex compiler
        assert!(catalog().len() > 100);
    }

    #[test]
    fn test_all_groups_represented() {
        let groups = [
            RuleGroup::ProfanityHebrew,
            RuleGroup::ProfanityEnglish,
            RuleGroup::MisleadingHealth,
            RuleGroup::MisleadingFinancial,
            RuleGroup::MisleadingConspiracy,
            RuleGroup::ManipulationUrgency,
            RuleGroup::ManipulationEmotional,
            RuleGroup::ManipulationSocial,
            RuleGroup::ScamPhishing,
            RuleGroup::ScamImpersonation,
            RuleGroup::DangerousViolence,
            RuleGroup::DangerousSelfHarm,
            RuleGroup::DangerousIllegal,
        ];
        for group in groups {
            assert!(
                catalog().iter().any(|r| r.group == group),
                "no rules for group {:?}",
                group
            );
        }
    }

    #[test]
    fn test_group_category_mapping() {
        assert_eq!(RuleGroup::MisleadingFinancial.category(), Category::Scam);
        assert_eq!(RuleGroup::ScamPhishing.category(), Category::Phishing);
        assert_eq!(RuleGroup::ScamImpersonation.category(), Category::Phishing);
        assert_eq!(
            RuleGroup::MisleadingConspiracy.category(),
            Category::Misinformation
        );
        assert_eq!(
            RuleGroup::DangerousSelfHarm.category(),
            Category::DangerousContent
        );
    }

    #[test]
    fn test_group_bucket_mapping() {
        // Buckets follow the group, not the reported category
        assert_eq!(RuleGroup::MisleadingFinancial.bucket(), Bucket::Misleading);
        assert_eq!(RuleGroup::ScamPhishing.bucket(), Bucket::Scam);
        assert_eq!(RuleGroup::ProfanityHebrew.bucket(), Bucket::Profanity);
        assert_eq!(RuleGroup::DangerousIllegal.bucket(), Bucket::Dangerous);
    }

    #[test]
    fn test_confidences_in_range() {
        for rule in catalog() {
            assert!(
                (0.0..=1.0).contains(&rule.confidence),
                "confidence out of range for {:?}",
                rule.pattern.as_str()
            );
        }
    }

    #[test]
    fn test_sample_patterns_match() {
        let hits = [
            ("only 3 spots left", RuleGroup::ManipulationUrgency),
            ("verify your account immediately", RuleGroup::ScamPhishing),
            ("nigerian prince", RuleGroup::MisleadingFinancial),
            ("the earth is flat", RuleGroup::MisleadingConspiracy),
            ("how to make a bomb", RuleGroup::DangerousViolence),
            ("לך תזדיין", RuleGroup::ProfanityHebrew),
        ];
        for (text, group) in hits {
            assert!(
                catalog()
                    .iter()
                    .any(|r| r.group == group && r.pattern.is_match(text)),
                "expected a {:?} rule to match {:?}",
                group,
                text
            );
        }
    }

    #[test]
    fn test_category_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&Category::DangerousContent).unwrap(),
            "\"dangerous_content\""
        );
    }
}
