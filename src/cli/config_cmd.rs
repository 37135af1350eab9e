//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::transcription::ResponseFormat;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let mut config = store.load().await?;
    apply_config_value(&mut config, key, value)?;
    store.save(&config).await?;

    let shown = if key == "api_key" {
        mask_api_key(value)
    } else {
        value.to_string()
    };
    presenter.success(&format!("{} = {}", key, shown));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.load().await?;
    let value = display_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
    presenter.output(&value);

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = display_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate `value` for `key` and store it in `config`
fn apply_config_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "api_key" => {
            if value.trim().is_empty() {
                return Err(invalid("API key must not be empty".to_string()));
            }
            config.api_key = Some(value.to_string());
        }
        "api_url" => {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(invalid(format!(
                    "Invalid value '{}'. URL must start with http:// or https://",
                    value
                )));
            }
            config.api_url = Some(value.to_string());
        }
        "model" => {
            if value.trim().is_empty() {
                return Err(invalid("Model must not be empty".to_string()));
            }
            config.model = Some(value.to_string());
        }
        "temperature" => {
            let temperature = value
                .trim()
                .parse::<f64>()
                .map_err(|_| invalid(format!("Invalid value '{}'. Expected a number", value)))?;
            config.temperature = Some(temperature);
        }
        "response_format" => {
            let format = value
                .parse::<ResponseFormat>()
                .map_err(|e| invalid(e.to_string()))?;
            config.response_format = Some(format.to_string());
        }
        // Empty language means auto-detect
        "language" => config.language = Some(value.trim().to_string()),
        _ => return Err(invalid("Unknown key".to_string())),
    }

    Ok(())
}

/// Render a config value for display, masking the API key
fn display_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "api_key" => config.api_key.as_deref().map(mask_api_key),
        "api_url" => config.api_url.clone(),
        "model" => config.model.clone(),
        "temperature" => config.temperature.map(|t| t.to_string()),
        "response_format" => config.response_format.clone(),
        "language" => config.language.as_ref().map(|l| {
            if l.is_empty() {
                "(auto-detect)".to_string()
            } else {
                l.clone()
            }
        }),
        _ => None,
    }
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_api_key_long() {
        assert_eq!(mask_api_key("gsk_abcdefghijklmnop"), "gsk_...mnop");
    }

    #[test]
    fn mask_api_key_short() {
        assert_eq!(mask_api_key("short"), "*****");
    }

    #[test]
    fn apply_temperature() {
        let mut config = AppConfig::empty();
        apply_config_value(&mut config, "temperature", "0.3").unwrap();
        assert_eq!(config.temperature, Some(0.3));
        assert!(apply_config_value(&mut config, "temperature", "warm").is_err());
    }

    #[test]
    fn apply_response_format_normalizes() {
        let mut config = AppConfig::empty();
        apply_config_value(&mut config, "response_format", "TEXT").unwrap();
        assert_eq!(config.response_format.as_deref(), Some("text"));
        assert!(apply_config_value(&mut config, "response_format", "srt").is_err());
    }

    #[test]
    fn apply_api_url_requires_http_scheme() {
        let mut config = AppConfig::empty();
        assert!(apply_config_value(&mut config, "api_url", "ftp://example.com").is_err());
        apply_config_value(&mut config, "api_url", "http://localhost:9000/v1").unwrap();
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:9000/v1"));
    }

    #[test]
    fn apply_empty_language_means_auto_detect() {
        let mut config = AppConfig::empty();
        apply_config_value(&mut config, "language", "").unwrap();
        assert_eq!(config.language.as_deref(), Some(""));
        assert_eq!(
            display_value(&config, "language").as_deref(),
            Some("(auto-detect)")
        );
    }

    #[test]
    fn apply_rejects_empty_model_and_key() {
        let mut config = AppConfig::empty();
        assert!(apply_config_value(&mut config, "model", " ").is_err());
        assert!(apply_config_value(&mut config, "api_key", "").is_err());
    }

    #[test]
    fn display_masks_api_key() {
        let config = AppConfig {
            api_key: Some("gsk_1234567890abcd".to_string()),
            ..Default::default()
        };
        assert_eq!(display_value(&config, "api_key").as_deref(), Some("gsk_...abcd"));
        assert!(display_value(&config, "model").is_none());
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(ensure_valid_key("duration").is_err());
        assert!(ensure_valid_key("model").is_ok());
    }
}
