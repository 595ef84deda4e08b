pub mod config;
pub mod error;

// Repository data fetcher
pub mod github;

// Summary generator
pub mod llm;

// HTTP shell
pub mod api;

pub mod cli;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
