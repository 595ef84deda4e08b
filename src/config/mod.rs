use crate::error::{Error, Result};
use crate::github::GitHubConfig;
use crate::llm::LlmConfig;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub github: GitHubConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_request_body_size: 65_536,
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PORT value".to_string()))?;

        let max_request_body_size = var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|| "65536".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_REQUEST_BODY_SIZE value".to_string()))?;

        Ok(Settings {
            server: ServerConfig {
                host,
                port,
                max_request_body_size,
            },
            github: GitHubConfig::from_vars(&var),
            llm: LlmConfig::from_vars(&var),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.server.max_request_body_size == 0 {
            return Err(Error::Config(
                "Request body limit must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Read a secret, treating an empty value as unset
pub(crate) fn secret<F>(var: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let settings = Settings::from_vars(lookup(&[])).unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8000);
        assert!(settings.github.token.is_none());
        assert_eq!(settings.github.api_base_url, "https://api.github.com");
        assert!(settings.llm.api_key.is_none());
        assert_eq!(settings.llm.max_tokens, 500);
    }

    #[test]
    fn test_empty_token_is_treated_as_absent() {
        let settings =
            Settings::from_vars(lookup(&[("GITHUB_TOKEN", ""), ("NEBIUS_API_KEY", "  ")])).unwrap();
        assert!(settings.github.token.is_none());
        assert!(settings.llm.api_key.is_none());
    }

    #[test]
    fn test_secrets_are_read() {
        let settings = Settings::from_vars(lookup(&[
            ("GITHUB_TOKEN", "ghp_test"),
            ("NEBIUS_API_KEY", "nb_test"),
            ("LLM_MODEL", "tiny-model"),
        ]))
        .unwrap();
        assert_eq!(settings.github.token.as_deref(), Some("ghp_test"));
        assert_eq!(settings.llm.api_key.as_deref(), Some("nb_test"));
        assert_eq!(settings.llm.model, "tiny-model");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Settings::from_vars(lookup(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_body_limit_is_rejected() {
        let result = Settings::from_vars(lookup(&[("MAX_REQUEST_BODY_SIZE", "-1")]));
        assert!(matches!(result, Err(Error::Config(_))));

        let result = Settings::from_vars(lookup(&[("MAX_REQUEST_BODY_SIZE", "64kb")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_timeouts_fall_back_to_defaults() {
        let settings = Settings::from_vars(lookup(&[
            ("GITHUB_TIMEOUT", "soon"),
            ("LLM_TIMEOUT", "-5"),
        ]))
        .unwrap();
        assert_eq!(settings.github.timeout_secs, 30);
        assert_eq!(settings.llm.timeout_secs, 60);

        let settings =
            Settings::from_vars(lookup(&[("GITHUB_TIMEOUT", "5"), ("LLM_TIMEOUT", "90")])).unwrap();
        assert_eq!(settings.github.timeout_secs, 5);
        assert_eq!(settings.llm.timeout_secs, 90);
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = Settings::from_vars(lookup(&[])).unwrap();
        assert!(settings.validate().is_ok());

        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_body_limit_fails_validation() {
        let mut settings = Settings::from_vars(lookup(&[])).unwrap();
        settings.server.max_request_body_size = 0;
        assert!(matches!(settings.validate(), Err(Error::Config(_))));
    }
}
