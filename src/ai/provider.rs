use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ProviderKind;
use crate::models::{AnalysisError, AnalysisResult, Result, Violation};

/// Request for a provider completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub prompt: String,
    pub system_prompt: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<i32>,
}

impl AnalysisRequest {
    /// Standard safety-analysis request for a message
    pub fn for_message(message: &str) -> Self {
        Self {
            prompt: build_analysis_prompt(message),
            system_prompt: Some(ANALYZER_SYSTEM_PROMPT.to_string()),
            temperature: Some(0.2),
            max_tokens: Some(2048),
        }
    }
}

/// Trait for external safety-analysis providers
#[async_trait]
pub trait SafetyProvider: Send + Sync {
    /// Get the provider kind
    fn kind(&self) -> ProviderKind;

    /// Submit a text completion request; returns the raw model output
    async fn complete(&self, request: AnalysisRequest) -> Result<String>;

    /// Submit an image for vision analysis; returns the raw model output.
    /// Providers without a vision endpoint reject the call.
    async fn complete_vision(&self, _prompt: &str, _image_png: &[u8]) -> Result<String> {
        Err(AnalysisError::UnsupportedOperation {
            provider: self.kind().to_string(),
            operation: "vision analysis".to_string(),
        })
    }
}

/// System prompt used by providers with a separate system role
pub const ANALYZER_SYSTEM_PROMPT: &str =
    "You are an AI safety analyzer. Respond ONLY with valid JSON.";

/// Master analysis prompt. The message under analysis is interpolated at
/// the {{MESSAGE}} placeholder.
pub const SAFETY_ANALYSIS_PROMPT: &str = r#"You are an AI safety analyzer. Your job is to analyze AI-generated messages for manipulation, deception, or harmful content.

Analyze the following AI response for:

1. **Sales Manipulation**: Aggressive sales tactics, FOMO, false scarcity, pressure to buy
2. **Emotional Manipulation**: Guilt-tripping, gaslighting, social pressure, emotional blackmail
3. **Fear Mongering**: Artificial urgency, threat tactics, fear-based persuasion
4. **Phishing Attempts**: Requests for credentials, account verification scams
5. **Scams**: Too-good-to-be-true offers, advance fee fraud, pyramid schemes
6. **Dangerous Content**: Weapons, illegal hacking, self-harm instructions
7. **Misinformation**: False claims, misleading information, conspiracy theories
8. **Privacy Violations**: Attempts to extract personal information

**AI Message to Analyze:**
---
{{MESSAGE}}
---

**Response Format (JSON only):**
{
  "is_safe": true/false,
  "safety_score": 0.0-1.0,
  "violations": [
    {
      "category": "sales_manipulation" | "manipulation" | "phishing" | "scam" | "dangerous_content" | "misinformation" | "privacy_violation",
      "severity": "low" | "medium" | "high" | "critical",
      "confidence": 0.0-1.0,
      "description": "Brief description of the issue",
      "evidence": "Specific text/pattern that triggered this",
      "tactics": ["specific_tactic_1", "specific_tactic_2"],
      "recommendation": "What the user should do"
    }
  ],
  "overall_assessment": "Brief summary of safety status",
  "red_flags": ["flag1", "flag2"],
  "safe_aspects": ["aspect1", "aspect2"]
}

**Important:**
- Be precise and evidence-based
- Provide confidence scores (0.0-1.0)
- If safe, return empty violations array
- Look for subtle manipulation, not just obvious patterns
- Consider context and tone
- Return ONLY valid JSON, no additional text"#;

/// Prompt used on the vision path, where only a screenshot is available
pub const VISION_ANALYSIS_PROMPT: &str = "Analyze this AI conversation screenshot for \
manipulation, deception, or harmful content. Focus on reading the AI's responses. \
Return JSON format with is_safe, safety_score, violations array.";

pub fn build_analysis_prompt(message: &str) -> String {
    SAFETY_ANALYSIS_PROMPT.replace("{{MESSAGE}}", message)
}

/// Map a reqwest failure onto the analysis error taxonomy
pub(crate) fn map_transport_error(provider: &str, e: reqwest::Error) -> AnalysisError {
    if e.is_timeout() {
        AnalysisError::Timeout(provider.to_string())
    } else {
        AnalysisError::Transport {
            provider: provider.to_string(),
            message: e.to_string(),
        }
    }
}

/// Strip a fenced code block from model output.
///
/// Providers often wrap the requested JSON object in ```json ... ``` even
/// when told not to; the payload inside the first fence is returned as-is.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(end) = rest.find("```") else {
        return trimmed;
    };
    let inner = &rest[..end];
    // Skip the language identifier line if present
    let inner = match inner.find('\n') {
        Some(idx) => &inner[idx + 1..],
        None => inner,
    };
    inner.trim()
}

/// Raw provider verdict shape. `is_safe`, `safety_score` and `violations`
/// are required; anything else the provider sends is carried through.
#[derive(Debug, Deserialize)]
struct ProviderVerdict {
    is_safe: bool,
    safety_score: f64,
    violations: Vec<Violation>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

/// Parse and validate raw provider output into an [`AnalysisResult`].
///
/// The fence is stripped before parsing; a parse failure is a
/// `MalformedResponse`, never a safe verdict. Violations pass through
/// un-rescored, but the provider's own `is_safe` flag is not trusted
/// blindly: it is forced consistent with the violation list, and the
/// score is clamped into [0, 1].
pub fn normalize_verdict(kind: ProviderKind, raw: &str) -> Result<AnalysisResult> {
    let payload = strip_code_fence(raw);
    let verdict: ProviderVerdict =
        serde_json::from_str(payload).map_err(|e| AnalysisError::MalformedResponse {
            provider: kind.to_string(),
            message: e.to_string(),
        })?;

    let consistent_is_safe = verdict.violations.is_empty();
    if verdict.is_safe != consistent_is_safe {
        warn!(
            provider = %kind,
            "provider verdict inconsistent with its violation list, correcting"
        );
    }

    Ok(AnalysisResult {
        is_safe: consistent_is_safe,
        safety_score: verdict.safety_score.clamp(0.0, 1.0),
        violations: verdict.violations,
        source: kind.source_tag().to_string(),
        analyzer: kind.analyzer_label().to_string(),
        stats: None,
        extra: verdict.extra,
    })
}
