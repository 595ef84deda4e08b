pub mod client;
pub mod config;
pub mod models;
pub mod summarizer;

pub use client::ChatClient;
pub use config::LlmConfig;
pub use models::AnalysisResult;
pub use summarizer::Summarizer;
