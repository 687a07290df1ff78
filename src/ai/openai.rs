use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::provider::{map_transport_error, AnalysisRequest, SafetyProvider};
use crate::config::ProviderKind;
use crate::models::{AnalysisError, Result};

const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI chat-completions provider
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl OpenAiProvider {
    pub fn new(api_key: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout,
        }
    }

    fn base_url(&self) -> &str {
        "https://api.openai.com"
    }
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: i32,
    response_format: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[async_trait]
impl SafetyProvider for OpenAiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn complete(&self, request: AnalysisRequest) -> Result<String> {
        info!(model = %self.model, "Sending analysis request to OpenAI");

        let mut messages = Vec::new();
        if let Some(system) = request.system_prompt {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: request.prompt,
        });

        let chat_request = ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: request.temperature.unwrap_or(0.2),
            max_tokens: request.max_tokens.unwrap_or(2048),
            // Constrains the model to emit a single JSON object
            response_format: json!({"type": "json_object"}),
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&chat_request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| map_transport_error("openai", e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::ProviderStatus {
                provider: "openai".to_string(),
                status,
                body,
            });
        }

        let chat_response: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| AnalysisError::MalformedResponse {
                    provider: "openai".to_string(),
                    message: e.to_string(),
                })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AnalysisError::MalformedResponse {
                provider: "openai".to_string(),
                message: "response contained no choices".to_string(),
            })
    }
}
