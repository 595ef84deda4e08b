use crate::llm::{
    config::LlmConfig,
    models::{ChatMessage, ChatRequest, ChatResponse},
};
use crate::{Error, Result};
use reqwest::Client;
use tracing::debug;

/// Minimal OpenAI-compatible chat-completions client
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    config: LlmConfig,
}

impl ChatClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("repo-summarizer/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Request a single completion for a system/user message pair
    pub async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Config("Generation API key is not configured".to_string()))?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_prompt),
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            n: 1,
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        debug!("Chat completion request: POST {} (model {})", url, request.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Upstream {
                status,
                message: "Generation provider error".to_string(),
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("Failed to parse chat completion: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::Decode("Chat completion contained no content".to_string()))
    }
}
