//! Environment-driven backend configuration.

use storyloom_error::{ConfigError, StoryloomResult};

/// Default API base URL (SiliconFlow, OpenAI-compatible).
pub const DEFAULT_BASE_URL: &str = "https://api.siliconflow.cn/v1";
/// Default chat-completion model.
pub const DEFAULT_TEXT_MODEL: &str = "THUDM/GLM-4-9B-0414";
/// Default image-synthesis model.
pub const DEFAULT_IMAGE_MODEL: &str = "Kwai-Kolors/Kolors";

/// Shared configuration for both backend clients.
///
/// Loaded from the environment; `.env` loading via `dotenvy` is the
/// binary's responsibility, not this crate's.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Bearer token for both endpoints
    pub api_key: String,
    /// API base URL without a trailing slash
    pub base_url: String,
    /// Chat-completion model identifier
    pub text_model: String,
    /// Image-synthesis model identifier
    pub image_model: String,
}

impl BackendConfig {
    /// Build a configuration from an API key and the documented defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    /// Read configuration from the environment.
    ///
    /// `STORYLOOM_API_KEY` is required; `STORYLOOM_BASE_URL`,
    /// `STORYLOOM_TEXT_MODEL` and `STORYLOOM_IMAGE_MODEL` override the
    /// defaults when set.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the API key is not set.
    pub fn from_env() -> StoryloomResult<Self> {
        let api_key = std::env::var("STORYLOOM_API_KEY")
            .map_err(|_| ConfigError::new("STORYLOOM_API_KEY not set"))?;
        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("STORYLOOM_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Ok(model) = std::env::var("STORYLOOM_TEXT_MODEL") {
            config.text_model = model;
        }
        if let Ok(model) = std::env::var("STORYLOOM_IMAGE_MODEL") {
            config.image_model = model;
        }
        Ok(config)
    }

    /// Override the base URL, trimming any trailing slash.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_documented_defaults() {
        let config = BackendConfig::new("sk-test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
        assert_eq!(config.image_model, DEFAULT_IMAGE_MODEL);
    }

    #[test]
    fn with_base_url_trims_trailing_slash() {
        let config = BackendConfig::new("sk-test").with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }
}
