use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::provider::{map_transport_error, AnalysisRequest, SafetyProvider};
use crate::config::ProviderKind;
use crate::models::{AnalysisError, Result};

const DEFAULT_MODEL: &str = "claude-3-5-haiku-20241022";
const API_VERSION: &str = "2023-06-01";

/// Anthropic messages-API provider
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl AnthropicProvider {
    pub fn new(api_key: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout,
        }
    }

    fn base_url(&self) -> &str {
        "https://api.anthropic.com"
    }
}

// Anthropic API types

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<Message>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

#[async_trait]
impl SafetyProvider for AnthropicProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    async fn complete(&self, request: AnalysisRequest) -> Result<String> {
        info!(model = %self.model, "Sending analysis request to Anthropic");

        let messages_request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: request.max_tokens.unwrap_or(2048),
            system: request.system_prompt,
            messages: vec![Message {
                role: "user".to_string(),
                content: request.prompt,
            }],
            temperature: request.temperature.unwrap_or(0.2),
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url()))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("Content-Type", "application/json")
            .json(&messages_request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| map_transport_error("anthropic", e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::ProviderStatus {
                provider: "anthropic".to_string(),
                status,
                body,
            });
        }

        let messages_response: MessagesResponse =
            response
                .json()
                .await
                .map_err(|e| AnalysisError::MalformedResponse {
                    provider: "anthropic".to_string(),
                    message: e.to_string(),
                })?;

        let text = messages_response
            .content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(AnalysisError::MalformedResponse {
                provider: "anthropic".to_string(),
                message: "response contained no text blocks".to_string(),
            });
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_shape() {
        let request = MessagesRequest {
            model: "claude-3-5-haiku-20241022".to_string(),
            max_tokens: 2048,
            system: Some("be brief".to_string()),
            messages: vec![Message {
                role: "user".to_string(),
                content: "analyze this".to_string(),
            }],
            temperature: 0.2,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "claude-3-5-haiku-20241022");
        assert_eq!(json["system"], "be brief");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 2048);
    }

    #[test]
    fn test_system_field_omitted_when_none() {
        let request = MessagesRequest {
            model: "claude-3-5-haiku-20241022".to_string(),
            max_tokens: 2048,
            system: None,
            messages: vec![],
            temperature: 0.2,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("system").is_none());
    }

    #[test]
    fn test_response_joins_text_blocks_and_skips_others() {
        let raw = r#"{
            "content": [
                {"type": "text", "text": "{\"is_safe\""},
                {"type": "tool_use", "id": "x", "name": "y", "input": {}},
                {"type": "text", "text": ": true}"}
            ]
        }"#;
        let parsed: MessagesResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed
            .content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect();
        assert_eq!(text, "{\"is_safe\": true}");
    }
}
