//! Main app runner for file transcription

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{TranscribeCallbacks, TranscribeFileUseCase, TranscribeInput};
use crate::domain::config::AppConfig;
use crate::domain::transcription::{ResponseFormat, TranscriptionResult};
use crate::infrastructure::{WhisperClient, XdgConfigStore};

use super::args::{Cli, TranscribeOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Run a single file transcription
pub async fn run_transcribe(options: TranscribeOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let client = WhisperClient::with_api_url(options.api_key, options.api_url);
    let use_case = TranscribeFileUseCase::new(client);

    let input = TranscribeInput {
        path: options.file.clone(),
        model: options.model,
        temperature: options.temperature,
        response_format: options.response_format,
        language: options.language,
    };

    presenter.start_spinner(&format!("Reading {}...", options.file.display()));
    let loaded = presenter.spinner_handle();
    let started = presenter.spinner_handle();

    let callbacks = TranscribeCallbacks {
        on_file_loaded: Some(Box::new(move |size: &str| {
            if let Some(ref spinner) = loaded {
                spinner.set_message(format!("Loaded audio ({})", size));
            }
        })),
        on_transcribing_start: Some(Box::new(move || {
            if let Some(ref spinner) = started {
                spinner.set_message("Transcribing...");
            }
        })),
        on_transcribing_end: None,
    };

    match use_case.execute(input, callbacks).await {
        Ok(output) => {
            presenter.spinner_success(&format!("Transcription complete ({})", output.audio_size));
            match render_result(&output.result, options.json) {
                Ok(rendered) => {
                    presenter.output(&rendered);
                    ExitCode::from(EXIT_SUCCESS)
                }
                Err(e) => {
                    presenter.error(&format!("Failed to render result: {}", e));
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        Err(e) => {
            presenter.spinner_fail("Transcription failed");
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Text for stdout: the `text` field, or the whole mapping as JSON when
/// requested or when there is no string `text` field
pub fn render_result(result: &TranscriptionResult, as_json: bool) -> serde_json::Result<String> {
    match result.text() {
        Some(text) if !as_json => Ok(text.to_string()),
        _ => serde_json::to_string_pretty(result.fields()),
    }
}

/// Build config from command-line arguments (API key comes from env/file only)
pub fn cli_config(cli: &Cli) -> AppConfig {
    AppConfig {
        api_key: None,
        api_url: cli.api_url.clone(),
        model: cli.model.clone(),
        temperature: cli.temperature,
        response_format: cli
            .response_format
            .map(|f| ResponseFormat::from(f).to_string()),
        language: cli.language.clone(),
    }
}

/// Config values taken from the environment.
///
/// `GROQ_API_URL` is read by clap into `--api-url`.
pub fn env_config() -> AppConfig {
    AppConfig {
        api_key: env::var(API_KEY_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load_or_empty().await;

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}

/// Resolve the final transcribe options, failing if the API key is missing
pub fn transcribe_options(
    config: AppConfig,
    file: PathBuf,
    json: bool,
) -> Result<TranscribeOptions, String> {
    let response_format = config.response_format_or_default();
    let api_url = config.api_url_or_default().to_string();
    let model = config.model_or_default().to_string();
    let temperature = config.temperature_or_default();
    let language = config.language_or_default().to_string();

    let api_key = config.api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
        format!(
            "Missing API key. Set {} environment variable or run 'whisper-client config set api_key <key>'",
            API_KEY_ENV
        )
    })?;

    Ok(TranscribeOptions {
        file,
        api_key,
        api_url,
        model,
        temperature,
        response_format,
        language,
        json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn render_text_by_default() {
        let result = TranscriptionResult::from_text("hello world");
        assert_eq!(render_result(&result, false).unwrap(), "hello world");
    }

    #[test]
    fn render_json_when_requested() {
        let result = TranscriptionResult::from_json_slice(br#"{"text":"hi","x_groq":{"id":"r1"}}"#)
            .unwrap();
        let rendered = render_result(&result, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["x_groq"]["id"], "r1");
        assert_eq!(parsed["text"], "hi");
    }

    #[test]
    fn render_json_when_text_missing() {
        let result = TranscriptionResult::from_json_slice(br#"{"segments":[]}"#).unwrap();
        let rendered = render_result(&result, false).unwrap();
        assert!(rendered.contains("segments"));
    }

    #[test]
    fn cli_config_maps_arguments() {
        let cli = Cli::parse_from([
            "whisper-client",
            "a.mp3",
            "-f",
            "verbose_json",
            "-t",
            "0.7",
            "--api-url",
            "http://localhost:1234/v1",
        ]);
        let config = cli_config(&cli);
        assert!(config.api_key.is_none());
        assert_eq!(config.response_format.as_deref(), Some("verbose_json"));
        assert_eq!(config.temperature, Some(0.7));
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:1234/v1"));
        assert!(config.model.is_none());
    }

    #[test]
    fn options_require_api_key() {
        let err = transcribe_options(AppConfig::defaults(), PathBuf::from("a.mp3"), false)
            .unwrap_err();
        assert!(err.contains(API_KEY_ENV));
    }

    #[test]
    fn options_use_merged_values() {
        let config = AppConfig::defaults().merge(AppConfig {
            api_key: Some("gsk_test".to_string()),
            response_format: Some("text".to_string()),
            language: Some("en".to_string()),
            ..Default::default()
        });

        let options = transcribe_options(config, PathBuf::from("a.mp3"), true).unwrap();
        assert_eq!(options.api_key, "gsk_test");
        assert_eq!(options.api_url, crate::domain::config::DEFAULT_API_URL);
        assert_eq!(options.model, "whisper-large-v3");
        assert_eq!(options.temperature, 0.0);
        assert_eq!(options.response_format, ResponseFormat::Text);
        assert_eq!(options.language, "en");
        assert!(options.json);
    }
}
