use crate::config::Settings;
use crate::github::GitHubClient;
use crate::llm::{AnalysisResult, Summarizer};
use crate::{Error, Result};

/// Run the fetch-then-generate pipeline once
pub async fn analyze(settings: &Settings, url: &str) -> Result<AnalysisResult> {
    let github = GitHubClient::new(settings.github.clone())?;
    let summarizer = Summarizer::new(settings.llm.clone())?;

    let data = github.fetch(url).await?;
    Ok(summarizer.generate(&data.readme, &data.files).await)
}

/// Summarize a repository and print the result
pub async fn summarize(settings: &Settings, url: &str) -> Result<()> {
    match analyze(settings, url).await {
        Ok(analysis) => {
            let json = serde_json::to_string_pretty(&analysis)
                .map_err(|e| Error::Internal(format!("Failed to render analysis: {e}")))?;
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            println!("\x1b[31m\u{2717}\x1b[0m Failed to summarize {}: {}", url, e);
            Err(e)
        }
    }
}
