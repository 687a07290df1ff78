//! Cumulative detection telemetry.
//!
//! Counters are process-wide but mutated only through [`Aggregator::record`],
//! one atomic update per completed analysis. Each analysis carries its own
//! per-call counter delta (see [`AnalysisResult::stats`]); the aggregator is
//! the single place deltas are folded into the running totals.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::models::{AnalysisResult, Severity, Violation};

/// Telemetry bucket a detection counts toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Profanity,
    Misleading,
    Manipulation,
    Scam,
    Dangerous,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Profanity => "profanity",
            Bucket::Misleading => "misleading",
            Bucket::Manipulation => "manipulation",
            Bucket::Scam => "scam",
            Bucket::Dangerous => "dangerous",
        }
    }

    /// Map a violation category string onto its bucket. Provider-sourced
    /// categories outside the known set are not counted.
    pub fn for_category(category: &str) -> Option<Bucket> {
        match category {
            "profanity" => Some(Bucket::Profanity),
            "misinformation" | "misleading" => Some(Bucket::Misleading),
            "manipulation" | "sales_manipulation" | "emotional_manipulation"
            | "fear_mongering" => Some(Bucket::Manipulation),
            "scam" | "phishing" => Some(Bucket::Scam),
            "dangerous_content" | "dangerous" => Some(Bucket::Dangerous),
            _ => None,
        }
    }
}

/// Per-category detection counters. Used both as a per-call delta attached
/// to results and as the cumulative process-wide totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCounts {
    pub profanity: u64,
    pub misleading: u64,
    pub manipulation: u64,
    pub scam: u64,
    pub dangerous: u64,
}

impl CategoryCounts {
    pub fn bump(&mut self, bucket: Bucket) {
        match bucket {
            Bucket::Profanity => self.profanity += 1,
            Bucket::Misleading => self.misleading += 1,
            Bucket::Manipulation => self.manipulation += 1,
            Bucket::Scam => self.scam += 1,
            Bucket::Dangerous => self.dangerous += 1,
        }
    }

    pub fn merge(&mut self, other: &CategoryCounts) {
        self.profanity += other.profanity;
        self.misleading += other.misleading;
        self.manipulation += other.manipulation;
        self.scam += other.scam;
        self.dangerous += other.dangerous;
    }

    pub fn total(&self) -> u64 {
        self.profanity + self.misleading + self.manipulation + self.scam + self.dangerous
    }

    /// Derive counts from a violation list. Used for provider-sourced
    /// results, which report categories but not counter deltas.
    pub fn from_violations(violations: &[Violation]) -> Self {
        let mut counts = CategoryCounts::default();
        for v in violations {
            if let Some(bucket) = Bucket::for_category(&v.category) {
                counts.bump(bucket);
            }
        }
        counts
    }
}

/// Snapshot report of cumulative detections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    pub total: u64,
    pub breakdown: CategoryCounts,
    /// Per-bucket share of total detections, 0.0-100.0
    pub percentages: BTreeMap<String, f64>,
    pub generated_at: DateTime<Utc>,
}

/// Convenience rollup of one analysis for downstream consumers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub highest_severity: Option<Severity>,
    pub categories: Vec<String>,
}

/// Summarize a single result: highest severity present and distinct
/// categories touched, in order of first appearance.
pub fn summarize(result: &AnalysisResult) -> AnalysisSummary {
    AnalysisSummary {
        highest_severity: result.highest_severity(),
        categories: result.categories(),
    }
}

/// Sink for completed stats snapshots. Implemented by the surrounding
/// system's persistence layer, not by this crate.
pub trait StatsSink: Send + Sync {
    fn publish(&self, report: &StatsReport);
}

/// Folds per-call counter deltas into process-wide totals
#[derive(Default)]
pub struct Aggregator {
    totals: Mutex<CategoryCounts>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed analysis. The result's own delta is preferred;
    /// provider results carry none, so their counts are derived from the
    /// violation list. Exactly one lock acquisition per call.
    pub fn record(&self, result: &AnalysisResult) {
        let delta = match &result.stats {
            Some(stats) => stats.clone(),
            None => CategoryCounts::from_violations(&result.violations),
        };
        if delta.total() == 0 {
            return;
        }
        self.totals.lock().merge(&delta);
    }

    pub fn snapshot(&self) -> CategoryCounts {
        self.totals.lock().clone()
    }

    pub fn report(&self) -> StatsReport {
        let breakdown = self.snapshot();
        let total = breakdown.total();
        let mut percentages = BTreeMap::new();
        let buckets = [
            (Bucket::Profanity, breakdown.profanity),
            (Bucket::Misleading, breakdown.misleading),
            (Bucket::Manipulation, breakdown.manipulation),
            (Bucket::Scam, breakdown.scam),
            (Bucket::Dangerous, breakdown.dangerous),
        ];
        for (bucket, count) in buckets {
            let pct = if total > 0 {
                (count as f64 / total as f64) * 100.0
            } else {
                0.0
            };
            percentages.insert(bucket.as_str().to_string(), pct);
        }
        StatsReport {
            total,
            breakdown,
            percentages,
            generated_at: Utc::now(),
        }
    }

    pub fn reset(&self) {
        *self.totals.lock() = CategoryCounts::default();
    }
}
