pub mod client;
pub mod config;
pub mod filter;
pub mod models;
pub mod parser;

pub use client::{GitHubClient, RepoData};
pub use config::GitHubConfig;
pub use filter::should_include_file;
pub use parser::{parse_repository_url, RepositoryInfo};
