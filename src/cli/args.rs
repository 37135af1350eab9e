//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::transcription::ResponseFormat;

/// whisper-client - transcribe audio files with Whisper-compatible APIs
#[derive(Parser, Debug)]
#[command(name = "whisper-client")]
#[command(version)]
#[command(about = "Audio file transcription using Whisper-compatible APIs (Groq by default)")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Audio file to transcribe
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Model identifier (e.g., whisper-large-v3, whisper-large-v3-turbo)
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature, usually between 0 and 1
    #[arg(short = 't', long, value_name = "TEMP", allow_negative_numbers = true)]
    pub temperature: Option<f64>,

    /// Response format requested from the API
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub response_format: Option<ResponseFormatArg>,

    /// Language code (e.g., en, de); omit to auto-detect
    #[arg(short = 'l', long, value_name = "LANG")]
    pub language: Option<String>,

    /// Transcription endpoint URL
    #[arg(long, value_name = "URL", env = "GROQ_API_URL")]
    pub api_url: Option<String>,

    /// Print the full result as JSON instead of just the text
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Response format argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResponseFormatArg {
    Json,
    Text,
    #[value(name = "verbose_json")]
    VerboseJson,
}

impl From<ResponseFormatArg> for ResponseFormat {
    fn from(arg: ResponseFormatArg) -> Self {
        match arg {
            ResponseFormatArg::Json => ResponseFormat::Json,
            ResponseFormatArg::Text => ResponseFormat::Text,
            ResponseFormatArg::VerboseJson => ResponseFormat::VerboseJson,
        }
    }
}

/// Parsed transcribe options
#[derive(Debug, Clone)]
pub struct TranscribeOptions {
    pub file: PathBuf,
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub temperature: f64,
    pub response_format: ResponseFormat,
    pub language: String,
    pub json: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api_key",
    "api_url",
    "model",
    "temperature",
    "response_format",
    "language",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
