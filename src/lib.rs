//! Hybrid content-safety analysis for AI-generated messages.
//!
//! Two detection tiers behind one entry point: a bilingual rule catalog
//! evaluated locally, and optional external LLM providers for deeper
//! analysis. The rule engine is always available and backs up every
//! provider failure, so [`SafetyOrchestrator::check_safety`] never errors.
//!
//! ```no_run
//! use textguard::{GuardSettings, SafetyOrchestrator};
//!
//! # async fn demo() {
//! let orchestrator = SafetyOrchestrator::new(GuardSettings::default());
//! let verdict = orchestrator
//!     .check_safety("Act now! Only 3 spots left!", None)
//!     .await;
//! assert!(!verdict.is_safe);
//! # }
//! ```

pub mod ai;
pub mod cache;
pub mod config;
pub mod engine;
pub mod models;
pub mod orchestrator;
pub mod rules;
pub mod telemetry;

pub use ai::SafetyProvider;
pub use config::{
    DetectionMode, GuardSettings, ProviderCredentials, ProviderKind, SettingsSource,
    StaticSettings, Thresholds,
};
pub use engine::PatternEngine;
pub use models::{AnalysisError, AnalysisResult, Result, Severity, Violation};
pub use orchestrator::SafetyOrchestrator;
pub use telemetry::{Aggregator, AnalysisSummary, CategoryCounts, StatsReport, StatsSink};
