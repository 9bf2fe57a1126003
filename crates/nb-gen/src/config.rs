use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Environment variable overriding [`GeminiConfig::base_url`].
pub const BASE_URL_ENV: &str = "NB_GEMINI_BASE_URL";
/// Environment variable overriding [`GeminiConfig::model`].
pub const MODEL_ENV: &str = "NB_GEMINI_MODEL";

/// Configuration for the generative-image service client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Service root, without a trailing slash
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 120,
        }
    }
}

impl GeminiConfig {
    /// Defaults, overridden by `NB_GEMINI_BASE_URL` / `NB_GEMINI_MODEL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reading variables through
    /// `lookup`. Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();
        if let Some(base_url) = read(BASE_URL_ENV) {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(model) = read(MODEL_ENV) {
            config.model = model;
        }
        config
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}
