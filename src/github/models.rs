use serde::{Deserialize, Serialize};

/// Entry of a repository contents listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
}

/// README payload from the readme endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Readme {
    pub content: String,
}
