use crate::config::secret;
use std::time::Duration;

/// Chat-completion provider configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Provider API key; generation degrades to the fallback without it
    pub api_key: Option<String>,

    /// Base URL of an OpenAI-compatible API, without trailing slash
    pub base_url: String,

    pub model: String,

    pub temperature: f32,

    /// Upper bound on generated tokens
    pub max_tokens: u32,

    pub timeout_secs: u64,
}

impl LlmConfig {
    pub(crate) fn from_vars<F>(var: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            api_key: secret(var, "NEBIUS_API_KEY"),
            base_url: var("LLM_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            model: var("LLM_MODEL").unwrap_or(defaults.model),
            timeout_secs: var("LLM_TIMEOUT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.tokenfactory.nebius.com/v1".to_string(),
            model: "meta-llama/Llama-3.3-70B-Instruct-fast".to_string(),
            temperature: 0.2,
            max_tokens: 500,
            timeout_secs: 60,
        }
    }
}
