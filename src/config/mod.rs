use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Engine configuration: gateway endpoint, transport timeout, and the
/// rate-limit retry policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainerConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub retry: RetryPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Bounded retry for rate-limit responses: a fixed delay between attempts,
/// counted against a total attempt cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicy {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl RetryPolicy {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:54321".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl TrainerConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("AI_TRAINER_BASE_URL") {
            config.api.base_url = url;
        }
        if let Ok(timeout) = std::env::var("AI_TRAINER_TIMEOUT_SECONDS") {
            config.api.timeout_seconds = timeout
                .parse()
                .context("AI_TRAINER_TIMEOUT_SECONDS must be an integer")?;
        }
        if let Ok(attempts) = std::env::var("AI_TRAINER_MAX_ATTEMPTS") {
            config.retry.max_attempts = attempts
                .parse()
                .context("AI_TRAINER_MAX_ATTEMPTS must be an integer")?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_retry_contract() {
        let config = TrainerConfig::default();
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.delay(), Duration::from_secs(1));
        assert_eq!(config.api.timeout_seconds, 30);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: TrainerConfig =
            serde_json::from_str(r#"{"api": {"base_url": "https://example.test"}}"#).unwrap();
        assert_eq!(config.api.base_url, "https://example.test");
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.retry.max_attempts, 3);
    }

    // Single test for the whole env seam: the vars are process-global, so
    // splitting this up would race under the parallel test runner.
    #[test]
    fn env_overrides_apply_and_reject_bad_values() {
        std::env::set_var("AI_TRAINER_BASE_URL", "https://env.test");
        std::env::set_var("AI_TRAINER_TIMEOUT_SECONDS", "5");
        std::env::set_var("AI_TRAINER_MAX_ATTEMPTS", "7");

        let config = TrainerConfig::from_env().unwrap();
        assert_eq!(config.api.base_url, "https://env.test");
        assert_eq!(config.api.timeout_seconds, 5);
        assert_eq!(config.retry.max_attempts, 7);

        std::env::set_var("AI_TRAINER_TIMEOUT_SECONDS", "soon");
        let err = TrainerConfig::from_env().unwrap_err();
        assert!(err
            .to_string()
            .contains("AI_TRAINER_TIMEOUT_SECONDS must be an integer"));

        std::env::set_var("AI_TRAINER_TIMEOUT_SECONDS", "5");
        std::env::set_var("AI_TRAINER_MAX_ATTEMPTS", "many");
        let err = TrainerConfig::from_env().unwrap_err();
        assert!(err
            .to_string()
            .contains("AI_TRAINER_MAX_ATTEMPTS must be an integer"));

        std::env::remove_var("AI_TRAINER_BASE_URL");
        std::env::remove_var("AI_TRAINER_TIMEOUT_SECONDS");
        std::env::remove_var("AI_TRAINER_MAX_ATTEMPTS");
    }
}
