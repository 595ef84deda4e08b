use mockito::Matcher;
use serde_json::json;
use summarizer::llm::{AnalysisResult, LlmConfig, Summarizer};

fn summarizer_for(server: &mockito::Server) -> Summarizer {
    let config = LlmConfig::default()
        .with_base_url(server.url())
        .with_api_key("nb_test");
    Summarizer::new(config).unwrap()
}

fn completion(content: &str) -> String {
    json!({
        "id": "cmpl-1",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_generate_parses_fenced_reply() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer nb_test")
        .match_body(Matcher::PartialJson(json!({
            "model": "meta-llama/Llama-3.3-70B-Instruct-fast",
            "temperature": 0.2,
            "max_tokens": 500,
            "n": 1
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion(
            "```json\n{\"summary\": \"Widget toolkit.\", \"technologies\": [\"Python\"], \"structure\": \"Flat.\"}\n```",
        ))
        .create_async()
        .await;

    let files = vec!["main.py".to_string()];
    let result = summarizer_for(&server).generate("# Widgets", &files).await;

    assert_eq!(
        result,
        AnalysisResult {
            summary: "Widget toolkit.".to_string(),
            technologies: vec!["Python".to_string()],
            structure: "Flat.".to_string(),
        }
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_prompt_carries_truncated_readme() {
    let mut server = mockito::Server::new_async().await;

    // 4999 'A's then 1001 'B's: only the first 'B' survives truncation
    let readme = format!("{}{}", "A".repeat(4999), "B".repeat(1001));

    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::Regex("A{4999}B\"".to_string()))
        .with_status(200)
        .with_body(completion(
            r#"{"summary": "s", "technologies": [], "structure": "t"}"#,
        ))
        .create_async()
        .await;

    let result = summarizer_for(&server).generate(&readme, &[]).await;
    assert_eq!(result.summary, "s");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_prose_reply_returns_fallback() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(completion("Sure! This repository is about {widgets"))
        .create_async()
        .await;

    let result = summarizer_for(&server).generate("# Widgets", &[]).await;
    assert_eq!(result, AnalysisResult::fallback());
}

#[tokio::test]
async fn test_wrong_shape_returns_fallback() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(completion(r#"{"summary": "only one key"}"#))
        .create_async()
        .await;

    let result = summarizer_for(&server).generate("# Widgets", &[]).await;
    assert_eq!(result, AnalysisResult::fallback());
}

#[tokio::test]
async fn test_provider_error_returns_fallback() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error": {"message": "invalid api key"}}"#)
        .create_async()
        .await;

    let result = summarizer_for(&server).generate("# Widgets", &[]).await;
    assert_eq!(result, AnalysisResult::fallback());
}

#[tokio::test]
async fn test_empty_choices_returns_fallback() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;

    let result = summarizer_for(&server).generate("# Widgets", &[]).await;
    assert_eq!(result, AnalysisResult::fallback());
}

#[tokio::test]
async fn test_unreachable_provider_returns_fallback() {
    let config = LlmConfig::default()
        .with_base_url("http://127.0.0.1:9")
        .with_api_key("nb_test");
    let summarizer = Summarizer::new(config).unwrap();

    let result = summarizer.generate("# Widgets", &[]).await;
    assert_eq!(result, AnalysisResult::fallback());
}

#[test]
fn test_fallback_serializes_to_fixed_object() {
    let value = serde_json::to_value(AnalysisResult::fallback()).unwrap();
    assert_eq!(
        value,
        json!({
            "summary": "Analysis failed to produce valid JSON.",
            "technologies": [],
            "structure": "Unknown"
        })
    );
}
