use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::provider::{map_transport_error, AnalysisRequest, SafetyProvider};
use crate::config::ProviderKind;
use crate::models::{AnalysisError, Result};

const DEFAULT_MODEL: &str = "gemini-pro";
const VISION_MODEL: &str = "gemini-pro-vision";

/// Google Gemini API provider. The only provider with a vision endpoint.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiProvider {
    pub fn new(api_key: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout,
        }
    }

    fn base_url(&self) -> &str {
        "https://generativelanguage.googleapis.com"
    }

    // The API key travels as a query parameter; the URL must never be logged
    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url(),
            model,
            self.api_key
        )
    }

    async fn generate(&self, model: &str, request: GeminiRequest) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint(model))
            .header("Content-Type", "application/json")
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| map_transport_error("gemini", e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::ProviderStatus {
                provider: "gemini".to_string(),
                status,
                body,
            });
        }

        let gemini_response: GeminiResponse =
            response
                .json()
                .await
                .map_err(|e| AnalysisError::MalformedResponse {
                    provider: "gemini".to_string(),
                    message: e.to_string(),
                })?;

        let text = gemini_response
            .candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(AnalysisError::MalformedResponse {
                provider: "gemini".to_string(),
                message: "response contained no text parts".to_string(),
            });
        }

        Ok(text)
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl GeminiPart {
    fn text(text: String) -> Self {
        Self {
            text: Some(text),
            inline_data: None,
        }
    }

    fn png(data: &[u8]) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: "image/png".to_string(),
                data: base64::engine::general_purpose::STANDARD.encode(data),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topK")]
    top_k: i32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: i32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[async_trait]
impl SafetyProvider for GeminiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn complete(&self, request: AnalysisRequest) -> Result<String> {
        info!("Sending analysis request to Gemini");

        // Gemini has no separate system role on this endpoint
        let text = match request.system_prompt {
            Some(system) => format!("{}\n\n{}", system, request.prompt),
            None => request.prompt,
        };

        let gemini_request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart::text(text)],
            }],
            generation_config: Some(GenerationConfig {
                temperature: request.temperature.unwrap_or(0.2),
                top_k: 40,
                top_p: 0.95,
                max_output_tokens: request.max_tokens.unwrap_or(2048),
            }),
        };

        self.generate(&self.model, gemini_request).await
    }

    async fn complete_vision(&self, prompt: &str, image_png: &[u8]) -> Result<String> {
        info!("Sending vision analysis request to Gemini");

        let gemini_request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![
                    GeminiPart::text(prompt.to_string()),
                    GeminiPart::png(image_png),
                ],
            }],
            generation_config: None,
        };

        self.generate(VISION_MODEL, gemini_request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_shape() {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart::text("analyze this".to_string())],
            }],
            generation_config: Some(GenerationConfig {
                temperature: 0.2,
                top_k: 40,
                top_p: 0.95,
                max_output_tokens: 2048,
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "analyze this");
        assert!(json["contents"][0]["parts"][0].get("inline_data").is_none());
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn test_vision_part_encodes_base64() {
        let part = GeminiPart::png(&[0x89, 0x50, 0x4e, 0x47]);
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["inline_data"]["mime_type"], "image/png");
        assert_eq!(json["inline_data"]["data"], "iVBORw==");
        assert!(json.get("text").is_none());
    }

    #[test]
    fn test_response_text_extraction_shape() {
        let raw = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "{\"is_safe\": true"}, {"text": ", \"violations\": []}"}]}
            }]
        }"#;
        let parsed: GeminiResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed
            .candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .filter_map(|p| p.text)
            .collect();
        assert_eq!(text, "{\"is_safe\": true, \"violations\": []}");
    }
}
