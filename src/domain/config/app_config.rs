//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::transcription::{ResponseFormat, DEFAULT_MODEL};

/// Groq's OpenAI-compatible transcription endpoint
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/audio/transcriptions";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub response_format: Option<String>,
    pub language: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            api_url: Some(DEFAULT_API_URL.to_string()),
            model: Some(DEFAULT_MODEL.to_string()),
            temperature: Some(0.0),
            response_format: Some(ResponseFormat::default().to_string()),
            language: Some(String::new()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            api_url: other.api_url.or(self.api_url),
            model: other.model.or(self.model),
            temperature: other.temperature.or(self.temperature),
            response_format: other.response_format.or(self.response_format),
            language: other.language.or(self.language),
        }
    }

    /// Get API URL, or the Groq endpoint if not set
    pub fn api_url_or_default(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Get model, or `whisper-large-v3` if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Get temperature, or 0.0 if not set
    pub fn temperature_or_default(&self) -> f64 {
        self.temperature.unwrap_or(0.0)
    }

    /// Get response format as parsed value, or default if not set/invalid
    pub fn response_format_or_default(&self) -> ResponseFormat {
        self.response_format
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get language, or empty (auto-detect) if not set
    pub fn language_or_default(&self) -> &str {
        self.language.as_deref().unwrap_or("")
    }
}
