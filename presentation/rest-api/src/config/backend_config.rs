use std::env;
use std::time::Duration;

use anyhow::{Context, bail};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the backend product service lives.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl BackendConfig {
    /// Load backend configuration from environment variables
    ///
    /// Environment variables:
    /// - BACKEND_URL: Base URL of the backend product service (required)
    /// - BACKEND_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            env::var("BACKEND_URL").ok(),
            env::var("BACKEND_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout: Option<String>) -> anyhow::Result<Self> {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .context("BACKEND_URL must be set")?;

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            bail!("BACKEND_URL must start with http:// or https://, got {base_url}");
        }

        let timeout_secs = match timeout {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("BACKEND_TIMEOUT_SECS is not a number: {raw}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_trailing_slash_and_default_timeout() {
        // Act
        let config =
            BackendConfig::from_values(Some("https://backend.internal/".to_string()), None)
                .unwrap();

        // Assert
        assert_eq!(config.base_url, "https://backend.internal");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_fail_when_backend_url_is_missing() {
        let result = BackendConfig::from_values(None, None);

        assert!(result.is_err());
    }

    #[test]
    fn should_fail_when_backend_url_has_no_scheme() {
        let result = BackendConfig::from_values(Some("backend.internal".to_string()), None);

        assert!(result.is_err());
    }

    #[test]
    fn should_fail_when_timeout_is_not_a_number() {
        let result = BackendConfig::from_values(
            Some("http://localhost:4000".to_string()),
            Some("soon".to_string()),
        );

        assert!(result.is_err());
    }

    #[test]
    fn should_read_custom_timeout() {
        let config = BackendConfig::from_values(
            Some("http://localhost:4000".to_string()),
            Some("5".to_string()),
        )
        .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
