//! Endpoint configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

const PROCESS_PATH: &str = "/processar-email";
const VALIDATE_PATH: &str = "/validate";

/// Where the classification backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from a base URL. Trailing slashes are dropped; a blank
    /// value falls back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_owned()
        } else {
            trimmed.to_owned()
        };
        Self { base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST` target for classification requests.
    #[must_use]
    pub fn process_url(&self) -> String {
        format!("{}{PROCESS_PATH}", self.base_url)
    }

    /// `POST` target for file validation requests.
    #[must_use]
    pub fn validate_url(&self) -> String {
        format!("{}{VALIDATE_PATH}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
