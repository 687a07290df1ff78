//! Detection settings and the asynchronous configuration-provider seam.
//!
//! The core treats all of this as read-only input: settings are loaded by
//! the surrounding system and handed in as a typed value.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::Result;

/// External analysis provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Gemini,
    OpenAi,
    Anthropic,
}

impl ProviderKind {
    /// Machine tag stamped into `AnalysisResult.source`
    pub fn source_tag(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini_api",
            ProviderKind::OpenAi => "openai_api",
            ProviderKind::Anthropic => "anthropic_api",
        }
    }

    /// Human-readable analyzer label
    pub fn analyzer_label(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "Gemini Pro",
            ProviderKind::OpenAi => "GPT-4o-mini",
            ProviderKind::Anthropic => "Claude 3.5 Haiku",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Gemini => write!(f, "gemini"),
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::Anthropic => write!(f, "anthropic"),
        }
    }
}

/// Detection strategy selected by configuration, read-only to the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionMode {
    /// Rule engine only; never contacts a provider
    Local,
    /// One provider attempt per analysis, rule engine as backstop
    AiAssisted,
}

impl Default for DetectionMode {
    fn default() -> Self {
        Self::Local
    }
}

/// Per-provider API credentials. Opaque to the core: keys are matched
/// against providers and otherwise never read, logged, or persisted.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ProviderCredentials {
    pub gemini: Option<String>,
    pub openai: Option<String>,
    pub anthropic: Option<String>,
}

impl ProviderCredentials {
    pub fn for_kind(&self, kind: ProviderKind) -> Option<&str> {
        match kind {
            ProviderKind::Gemini => self.gemini.as_deref(),
            ProviderKind::OpenAi => self.openai.as_deref(),
            ProviderKind::Anthropic => self.anthropic.as_deref(),
        }
    }

    pub fn is_configured(&self, kind: ProviderKind) -> bool {
        self.for_kind(kind).map(|k| !k.is_empty()).unwrap_or(false)
    }

    pub fn any_configured(&self) -> bool {
        [ProviderKind::Gemini, ProviderKind::OpenAi, ProviderKind::Anthropic]
            .into_iter()
            .any(|k| self.is_configured(k))
    }
}

// Keys must never leak through debug output
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn mark(key: &Option<String>) -> &'static str {
            match key {
                Some(k) if !k.is_empty() => "<redacted>",
                _ => "<unset>",
            }
        }
        f.debug_struct("ProviderCredentials")
            .field("gemini", &mark(&self.gemini))
            .field("openai", &mark(&self.openai))
            .field("anthropic", &mark(&self.anthropic))
            .finish()
    }
}

/// Score thresholds carried for downstream consumers (badge/warning
/// rendering). Not used by the core's own verdict logic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    pub warn_below: f64,
    pub block_below: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warn_below: 0.8,
            block_below: 0.5,
        }
    }
}

/// Complete detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardSettings {
    pub detection_mode: DetectionMode,
    pub credentials: ProviderCredentials,
    pub thresholds: Thresholds,
    /// Prefer screenshot analysis when text extraction is unavailable
    pub screenshot_mode: bool,
    pub cache_capacity: usize,
    pub request_timeout_secs: u64,
}

impl Default for GuardSettings {
    fn default() -> Self {
        Self {
            detection_mode: DetectionMode::Local,
            credentials: ProviderCredentials::default(),
            thresholds: Thresholds::default(),
            screenshot_mode: false,
            cache_capacity: crate::cache::DEFAULT_CAPACITY,
            request_timeout_secs: 8,
        }
    }
}

/// Asynchronous configuration provider implemented by the surrounding
/// system (storage, remote config, test fixtures).
#[async_trait]
pub trait SettingsSource: Send + Sync {
    async fn load(&self) -> Result<GuardSettings>;
}

/// In-memory settings source for embedding and tests
pub struct StaticSettings(pub GuardSettings);

#[async_trait]
impl SettingsSource for StaticSettings {
    async fn load(&self) -> Result<GuardSettings> {
        Ok(self.0.clone())
    }
}
