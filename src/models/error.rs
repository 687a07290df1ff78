use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised on the AI-assisted analysis path.
///
/// None of these are fatal: the orchestrator consumes every variant by
/// degrading to the local rule engine. The engine itself has no error path.
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
pub enum AnalysisError {
    #[error("No provider configured for source '{0}'")]
    NoProviderAvailable(String),

    #[error("{provider} request failed: {message}")]
    Transport { provider: String, message: String },

    #[error("{provider} returned error {status}: {body}")]
    ProviderStatus {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Request to {0} timed out")]
    Timeout(String),

    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse { provider: String, message: String },

    #[error("{provider} does not support {operation}")]
    UnsupportedOperation { provider: String, operation: String },
}

impl AnalysisError {
    /// Check if this error can be retried on a later analysis
    pub fn is_retryable(&self) -> bool {
        match self {
            AnalysisError::Transport { .. } | AnalysisError::Timeout(_) => true,
            AnalysisError::ProviderStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// True when the failure stems from missing configuration rather than
    /// the provider misbehaving
    pub fn is_configuration(&self) -> bool {
        matches!(self, AnalysisError::NoProviderAvailable(_))
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = AnalysisError::NoProviderAvailable("chatgpt".to_string());
        assert_eq!(
            err.to_string(),
            "No provider configured for source 'chatgpt'"
        );

        let err = AnalysisError::Transport {
            provider: "gemini".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "gemini request failed: connection refused");

        let err = AnalysisError::ProviderStatus {
            provider: "openai".to_string(),
            status: 401,
            body: "invalid key".to_string(),
        };
        assert!(err.to_string().contains("401"));

        let err = AnalysisError::Timeout("anthropic".to_string());
        assert_eq!(err.to_string(), "Request to anthropic timed out");

        let err = AnalysisError::MalformedResponse {
            provider: "gemini".to_string(),
            message: "not valid JSON".to_string(),
        };
        assert!(err.to_string().contains("Malformed response"));
    }

    #[test]
    fn test_is_retryable() {
        assert!(AnalysisError::Timeout("gemini".to_string()).is_retryable());
        assert!(AnalysisError::Transport {
            provider: "gemini".to_string(),
            message: "reset".to_string(),
        }
        .is_retryable());
        assert!(AnalysisError::ProviderStatus {
            provider: "openai".to_string(),
            status: 503,
            body: String::new(),
        }
        .is_retryable());
        assert!(AnalysisError::ProviderStatus {
            provider: "openai".to_string(),
            status: 429,
            body: String::new(),
        }
        .is_retryable());
        assert!(!AnalysisError::ProviderStatus {
            provider: "openai".to_string(),
            status: 401,
            body: String::new(),
        }
        .is_retryable());
        assert!(!AnalysisError::NoProviderAvailable("x".to_string()).is_retryable());
        assert!(!AnalysisError::MalformedResponse {
            provider: "gemini".to_string(),
            message: "bad".to_string(),
        }
        .is_retryable());
    }

    #[test]
    fn test_is_configuration() {
        assert!(AnalysisError::NoProviderAvailable("x".to_string()).is_configuration());
        assert!(!AnalysisError::Timeout("gemini".to_string()).is_configuration());
    }

    #[test]
    fn test_error_serialization() {
        let err = AnalysisError::Timeout("gemini".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Timeout"));

        let deserialized: AnalysisError = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.to_string(), err.to_string());
    }
}
