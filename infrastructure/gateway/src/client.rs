use std::time::Duration;

use reqwest::Client;

/// Shared HTTP client bound to one base URL.
pub struct GatewayClient {
    pub client: Client,
    pub base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Joins `path` onto the base URL. `path` is expected to start with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
