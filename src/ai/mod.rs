//! External analysis providers.
//!
//! Each provider wraps one vendor API behind [`SafetyProvider`]. Provider
//! selection avoids asking a model family to grade its own output: the
//! platform the analyzed message came from demotes that family's provider.

pub mod anthropic;
pub mod gemini;
pub mod openai;
pub mod provider;

use std::sync::Arc;
use std::time::Duration;

pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use provider::{
    build_analysis_prompt, normalize_verdict, strip_code_fence, AnalysisRequest, SafetyProvider,
    ANALYZER_SYSTEM_PROMPT, SAFETY_ANALYSIS_PROMPT, VISION_ANALYSIS_PROMPT,
};

use crate::config::{ProviderCredentials, ProviderKind};

/// Instantiate one provider per configured credential
pub fn create_providers(
    credentials: &ProviderCredentials,
    timeout: Duration,
) -> Vec<Arc<dyn SafetyProvider>> {
    let mut providers: Vec<Arc<dyn SafetyProvider>> = Vec::new();
    if let Some(key) = credentials.for_kind(ProviderKind::Gemini).filter(|k| !k.is_empty()) {
        providers.push(Arc::new(GeminiProvider::new(key, timeout)));
    }
    if let Some(key) = credentials.for_kind(ProviderKind::OpenAi).filter(|k| !k.is_empty()) {
        providers.push(Arc::new(OpenAiProvider::new(key, timeout)));
    }
    if let Some(key) = credentials.for_kind(ProviderKind::Anthropic).filter(|k| !k.is_empty()) {
        providers.push(Arc::new(AnthropicProvider::new(key, timeout)));
    }
    providers
}

/// Map a source-platform label onto the model family that produced it
pub fn platform_family(platform: &str) -> Option<ProviderKind> {
    let platform = platform.to_ascii_lowercase();
    if platform.contains("chatgpt") || platform.contains("gpt") || platform.contains("openai") {
        Some(ProviderKind::OpenAi)
    } else if platform.contains("gemini") || platform.contains("bard") {
        Some(ProviderKind::Gemini)
    } else if platform.contains("claude") || platform.contains("anthropic") {
        Some(ProviderKind::Anthropic)
    } else {
        None
    }
}

/// Provider preference order for a message from the given family.
///
/// The family that produced the message is excluded outright so a model
/// never assesses its own output.
pub fn preference_order(family: Option<ProviderKind>) -> &'static [ProviderKind] {
    match family {
        Some(ProviderKind::OpenAi) => &[ProviderKind::Gemini, ProviderKind::Anthropic],
        Some(ProviderKind::Gemini) => &[ProviderKind::OpenAi, ProviderKind::Anthropic],
        Some(ProviderKind::Anthropic) => &[ProviderKind::Gemini, ProviderKind::OpenAi],
        None => &[
            ProviderKind::Gemini,
            ProviderKind::OpenAi,
            ProviderKind::Anthropic,
        ],
    }
}

/// Pick the first available provider the preference order allows
pub fn select_provider(
    providers: &[Arc<dyn SafetyProvider>],
    platform: Option<&str>,
) -> Option<Arc<dyn SafetyProvider>> {
    let family = platform.and_then(platform_family);
    for kind in preference_order(family) {
        if let Some(provider) = providers.iter().find(|p| p.kind() == *kind) {
            return Some(Arc::clone(provider));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_providers() -> Vec<Arc<dyn SafetyProvider>> {
        let timeout = Duration::from_secs(8);
        vec![
            Arc::new(GeminiProvider::new("g", timeout)),
            Arc::new(OpenAiProvider::new("o", timeout)),
            Arc::new(AnthropicProvider::new("a", timeout)),
        ]
    }

    #[test]
    fn test_platform_family_mapping() {
        assert_eq!(platform_family("chatgpt"), Some(ProviderKind::OpenAi));
        assert_eq!(platform_family("ChatGPT Web"), Some(ProviderKind::OpenAi));
        assert_eq!(platform_family("gemini"), Some(ProviderKind::Gemini));
        assert_eq!(platform_family("bard"), Some(ProviderKind::Gemini));
        assert_eq!(platform_family("claude.ai"), Some(ProviderKind::Anthropic));
        assert_eq!(platform_family("some-forum"), None);
    }

    #[test]
    fn test_selection_avoids_own_family() {
        let providers = all_providers();

        let picked = select_provider(&providers, Some("chatgpt")).unwrap();
        assert_eq!(picked.kind(), ProviderKind::Gemini);

        let picked = select_provider(&providers, Some("gemini")).unwrap();
        assert_eq!(picked.kind(), ProviderKind::OpenAi);

        let picked = select_provider(&providers, Some("claude")).unwrap();
        assert_eq!(picked.kind(), ProviderKind::Gemini);
    }

    #[test]
    fn test_selection_falls_through_to_next_preference() {
        let timeout = Duration::from_secs(8);
        // Only Anthropic configured; a ChatGPT message still gets analyzed
        let providers: Vec<Arc<dyn SafetyProvider>> =
            vec![Arc::new(AnthropicProvider::new("a", timeout))];
        let picked = select_provider(&providers, Some("chatgpt")).unwrap();
        assert_eq!(picked.kind(), ProviderKind::Anthropic);
    }

    #[test]
    fn test_selection_none_when_only_own_family_available() {
        let timeout = Duration::from_secs(8);
        let providers: Vec<Arc<dyn SafetyProvider>> =
            vec![Arc::new(OpenAiProvider::new("o", timeout))];
        assert!(select_provider(&providers, Some("chatgpt")).is_none());
    }

    #[test]
    fn test_selection_unknown_platform_uses_full_order() {
        let providers = all_providers();
        let picked = select_provider(&providers, None).unwrap();
        assert_eq!(picked.kind(), ProviderKind::Gemini);

        let picked = select_provider(&providers, Some("some-forum")).unwrap();
        assert_eq!(picked.kind(), ProviderKind::Gemini);
    }

    #[test]
    fn test_create_providers_skips_missing_keys() {
        let credentials = ProviderCredentials {
            gemini: Some("g-key".to_string()),
            openai: None,
            anthropic: Some(String::new()),
        };
        let providers = create_providers(&credentials, Duration::from_secs(8));
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].kind(), ProviderKind::Gemini);
    }
}
