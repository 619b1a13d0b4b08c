use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::{RetryPolicy, TrainerConfig};

mod error;

pub use error::InferenceError;

/// Path of the generation function on the gateway host.
const GENERATE_FN_PATH: &str = "/functions/v1/ai-trainer";

/// Supplies the bearer credential for gateway calls. Implemented by the host
/// application's session layer, which owns token refresh and storage.
pub trait SessionProvider: Send + Sync {
    /// Current access token, or `None` when no session is active.
    fn access_token(&self) -> Option<String>;
}

/// Fixed-token session for tests and simple embeddings.
pub struct StaticSession(pub String);

impl SessionProvider for StaticSession {
    fn access_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Request payload for the generation endpoint
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    #[serde(rename = "systemPrompt", skip_serializing_if = "Option::is_none")]
    system_prompt: Option<&'a str>,
}

/// Wire shape of a successful generation response
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
    usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
struct TokenUsage {
    total_tokens: u64,
}

/// Validated generation output. `content` is opaque text that may embed a
/// JSON object; extracting it is the reconciler's job, not the client's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceResponse {
    pub content: String,
    pub token_usage: Option<u64>,
}

/// Resilience wrapper around the external text-generation service: bearer
/// auth, bounded rate-limit retry, and response-shape validation. Holds no
/// mutable state, so concurrent calls for independent requests are safe.
pub struct InferenceClient {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionProvider>,
    retry: RetryPolicy,
}

impl InferenceClient {
    pub fn new(config: &TrainerConfig, session: Arc<dyn SessionProvider>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            session,
            retry: config.retry.clone(),
        })
    }

    /// Issue one logical generation request.
    ///
    /// Fails fast with `AuthMissing` before any network I/O when no session
    /// is available. Rate-limit responses are retried up to the configured
    /// attempt cap with a fixed delay; any other non-success status is
    /// terminal. A 2xx response without a non-empty `response` field is
    /// `InvalidResponseFormat`.
    pub async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> std::result::Result<InferenceResponse, InferenceError> {
        let token = self
            .session
            .access_token()
            .ok_or(InferenceError::AuthMissing)?;

        let url = format!("{}{}", self.base_url, GENERATE_FN_PATH);
        let body = GenerateRequest {
            prompt,
            system_prompt,
        };

        let max_attempts = self.retry.max_attempts.max(1);
        for attempt in 1..=max_attempts {
            debug!(attempt, "sending inference request");

            let response = self
                .client
                .post(&url)
                .header("Authorization", format!("Bearer {token}"))
                .json(&body)
                .send()
                .await?;

            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempt < max_attempts {
                    warn!(attempt, "inference service rate limited, waiting to retry");
                    tokio::time::sleep(self.retry.delay()).await;
                    continue;
                }
                warn!(attempts = max_attempts, "rate limit retries exhausted");
                return Err(InferenceError::RateLimited {
                    attempts: max_attempts,
                });
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(InferenceError::Service {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: GenerateResponse = response
                .json()
                .await
                .map_err(|_| InferenceError::InvalidResponseFormat)?;

            let content = match parsed.response {
                Some(content) if !content.trim().is_empty() => content,
                _ => return Err(InferenceError::InvalidResponseFormat),
            };

            let token_usage = parsed.usage.map(|u| u.total_tokens);
            info!(?token_usage, "inference response received");

            return Ok(InferenceResponse {
                content,
                token_usage,
            });
        }

        Err(InferenceError::RateLimited {
            attempts: max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_with_defaults() {
        let config = TrainerConfig::default();
        let client = InferenceClient::new(&config, Arc::new(StaticSession("token".into())));
        assert!(client.is_ok());
    }

    #[test]
    fn request_serializes_wire_field_names() {
        let request = GenerateRequest {
            prompt: "hello",
            system_prompt: Some("be brief"),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["prompt"], "hello");
        assert_eq!(json["systemPrompt"], "be brief");

        let bare = GenerateRequest {
            prompt: "hello",
            system_prompt: None,
        };
        let json = serde_json::to_value(&bare).unwrap();
        assert!(json.get("systemPrompt").is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let mut config = TrainerConfig::default();
        config.api.base_url = "https://example.test/".to_string();
        let client =
            InferenceClient::new(&config, Arc::new(StaticSession("token".into()))).unwrap();
        assert_eq!(client.base_url, "https://example.test");
    }
}
