use crate::llm::{client::ChatClient, config::LlmConfig, models::AnalysisResult};
use crate::Result;
use tracing::{debug, warn};

/// README characters forwarded to the model
pub const README_CHAR_LIMIT: usize = 5000;

const SYSTEM_PROMPT: &str = r#"You are a technical assistant. Analyze the provided GitHub repository data.

Output strictly valid JSON with these 3 keys:
1. "summary": A clear, human-readable paragraph describing what the project does.
2. "technologies": A list of specific languages, frameworks, or libraries detected.
3. "structure": A brief explanation of the project structure based on the file list.

Do NOT output markdown code blocks (no ```json). Return ONLY the raw JSON string."#;

/// Turns repository metadata into an [`AnalysisResult`]
#[derive(Clone)]
pub struct Summarizer {
    client: ChatClient,
}

impl Summarizer {
    pub fn new(config: LlmConfig) -> Result<Self> {
        Ok(Self {
            client: ChatClient::new(config)?,
        })
    }

    /// Summarize a repository. Never fails: any generation problem is logged
    /// and replaced by [`AnalysisResult::fallback`].
    pub async fn generate(&self, readme: &str, files: &[String]) -> AnalysisResult {
        if !self.client.has_api_key() {
            warn!("No generation API key configured; returning fallback analysis");
            return AnalysisResult::fallback();
        }

        let user_prompt = build_user_prompt(readme, files);

        let reply = match self.client.complete(SYSTEM_PROMPT, &user_prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Generation request failed: {}", e.log_safe());
                return AnalysisResult::fallback();
            }
        };

        match parse_analysis(&reply) {
            Ok(analysis) => {
                debug!(
                    "Model reported {} technologies",
                    analysis.technologies.len()
                );
                analysis
            }
            Err(e) => {
                warn!(
                    "Model reply was not a valid analysis ({}); {} chars received",
                    e,
                    reply.chars().count()
                );
                AnalysisResult::fallback()
            }
        }
    }
}

/// First [`README_CHAR_LIMIT`] characters of the README
pub fn truncate_readme(readme: &str) -> &str {
    match readme.char_indices().nth(README_CHAR_LIMIT) {
        Some((idx, _)) => &readme[..idx],
        None => readme,
    }
}

pub fn build_user_prompt(readme: &str, files: &[String]) -> String {
    format!(
        "Root Files (Filtered): {}\nREADME Content (Truncated): {}",
        files.join(", "),
        truncate_readme(readme)
    )
}

/// Remove every markdown code-fence marker the model adds despite instructions
pub fn strip_code_fences(reply: &str) -> String {
    reply.replace("```json", "").replace("```", "").trim().to_string()
}

pub fn parse_analysis(reply: &str) -> serde_json::Result<AnalysisResult> {
    serde_json::from_str(&strip_code_fences(reply))
}
