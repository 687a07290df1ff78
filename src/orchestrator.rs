//! Analysis orchestration.
//!
//! [`SafetyOrchestrator`] is the single entry point for callers: it owns the
//! cache, the rule engine, the configured providers and the telemetry
//! aggregator, and it never surfaces an error. Whatever goes wrong on the
//! provider path, the caller gets a rule-engine verdict instead.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::ai::{
    self, normalize_verdict, AnalysisRequest, SafetyProvider, VISION_ANALYSIS_PROMPT,
};
use crate::cache::{content_key, ResultCache};
use crate::config::{DetectionMode, GuardSettings, ProviderKind};
use crate::engine::PatternEngine;
use crate::models::{AnalysisError, AnalysisResult, Result, Severity, Violation};
use crate::telemetry::{Aggregator, StatsReport, StatsSink};

const VISION_FALLBACK_SOURCE: &str = "vision_fallback";
const VISION_FALLBACK_ANALYZER: &str = "Screenshot Review";

/// Coordinates the detection tiers behind one infallible `check_safety` call
pub struct SafetyOrchestrator {
    settings: GuardSettings,
    engine: PatternEngine,
    cache: ResultCache,
    aggregator: Aggregator,
    providers: Vec<Arc<dyn SafetyProvider>>,
}

impl SafetyOrchestrator {
    pub fn new(settings: GuardSettings) -> Self {
        let providers = ai::create_providers(
            &settings.credentials,
            Duration::from_secs(settings.request_timeout_secs),
        );
        Self::with_providers(settings, providers)
    }

    /// Construct with an explicit provider set. Used for embedding custom
    /// providers and for tests.
    pub fn with_providers(
        settings: GuardSettings,
        providers: Vec<Arc<dyn SafetyProvider>>,
    ) -> Self {
        let cache = ResultCache::new(settings.cache_capacity);
        Self {
            settings,
            engine: PatternEngine::new(),
            cache,
            aggregator: Aggregator::new(),
            providers,
        }
    }

    /// Analyze a message. Never fails: any provider-path error downgrades
    /// to a rule-engine verdict.
    ///
    /// `source_platform` names where the message came from (e.g. "chatgpt");
    /// it steers provider selection so a model family never assesses its
    /// own output.
    pub async fn check_safety(&self, text: &str, source_platform: Option<&str>) -> AnalysisResult {
        let key = content_key(text);
        if let Some(hit) = self.cache.get(key) {
            debug!("returning cached analysis");
            return hit;
        }

        let result = match self.settings.detection_mode {
            DetectionMode::Local => self.engine.analyze(text),
            DetectionMode::AiAssisted => {
                match self.analyze_with_provider(text, source_platform).await {
                    Ok(result) => result,
                    Err(e) => {
                        warn!(error = %e, "provider analysis failed, falling back to rule engine");
                        self.engine.analyze(text)
                    }
                }
            }
        };

        self.aggregator.record(&result);
        self.cache.put(key, result.clone());
        result
    }

    /// One provider attempt, no retries across providers. A failed attempt
    /// is the caller's cue to fall back locally, not to burn more quota.
    async fn analyze_with_provider(
        &self,
        text: &str,
        source_platform: Option<&str>,
    ) -> Result<AnalysisResult> {
        let provider = ai::select_provider(&self.providers, source_platform).ok_or_else(|| {
            AnalysisError::NoProviderAvailable(
                source_platform.unwrap_or("unknown").to_string(),
            )
        })?;

        info!(provider = %provider.kind(), "dispatching analysis");
        let raw = provider.complete(AnalysisRequest::for_message(text)).await?;
        normalize_verdict(provider.kind(), &raw)
    }

    /// Analyze a screenshot of a conversation. Used when message text
    /// cannot be extracted; only the Gemini provider has a vision endpoint.
    ///
    /// Failure is conservative: an unanalyzable screenshot is flagged for
    /// the user, never waved through as safe. Screenshot verdicts are not
    /// cached, since identical captures are not expected to recur.
    pub async fn check_screenshot(&self, image_png: &[u8]) -> AnalysisResult {
        let result = match self.analyze_screenshot(image_png).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "screenshot analysis failed, flagging as unverified");
                Self::unverified_screenshot_result()
            }
        };
        self.aggregator.record(&result);
        result
    }

    async fn analyze_screenshot(&self, image_png: &[u8]) -> Result<AnalysisResult> {
        let provider = self
            .providers
            .iter()
            .find(|p| p.kind() == ProviderKind::Gemini)
            .ok_or_else(|| AnalysisError::NoProviderAvailable("vision".to_string()))?;

        info!("dispatching screenshot analysis");
        let raw = provider
            .complete_vision(VISION_ANALYSIS_PROMPT, image_png)
            .await?;
        normalize_verdict(provider.kind(), &raw)
    }

    fn unverified_screenshot_result() -> AnalysisResult {
        AnalysisResult {
            is_safe: false,
            safety_score: 0.5,
            violations: vec![Violation {
                category: "unverified_content".to_string(),
                severity: Severity::Medium,
                confidence: 0.3,
                kind: None,
                evidence: None,
                description: Some(
                    "Screenshot could not be analyzed; treat its content with caution".to_string(),
                ),
                tactics: None,
                recommendation: Some(
                    "Review the conversation manually before acting on it".to_string(),
                ),
            }],
            source: VISION_FALLBACK_SOURCE.to_string(),
            analyzer: VISION_FALLBACK_ANALYZER.to_string(),
            stats: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn settings(&self) -> &GuardSettings {
        &self.settings
    }

    /// Snapshot of cumulative detection stats
    pub fn stats_report(&self) -> StatsReport {
        self.aggregator.report()
    }

    pub fn publish_stats(&self, sink: &dyn StatsSink) {
        sink.publish(&self.aggregator.report());
    }

    pub fn reset_stats(&self) {
        self.aggregator.reset();
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
