//! whisper-client - Whisper-compatible audio transcription client
//!
//! This crate uploads an audio file to an OpenAI-style
//! `audio/transcriptions` endpoint (Groq by default) and normalizes the
//! response, JSON object or bare text, into a single result mapping.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects (audio file, request, result, config) and errors
//! - **Application**: The file transcription use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (HTTP client, TOML config store)
//! - **CLI**: Command-line interface, argument parsing, and logging setup
//!
//! # Example
//!
//! ```no_run
//! use whisper_client::application::ports::Transcriber;
//! use whisper_client::domain::transcription::{AudioFile, TranscriptionRequest};
//! use whisper_client::infrastructure::WhisperClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("example.mp3")?;
//! let client = WhisperClient::new(std::env::var("GROQ_API_KEY")?);
//!
//! let request = TranscriptionRequest::new(AudioFile::new(data, "example.mp3"))
//!     .with_model("whisper-large-v3")
//!     .with_temperature(0.1)
//!     .with_response_format("text")
//!     .with_language("en");
//!
//! let result = client.transcribe(&request).await?;
//! println!("{}", result.text().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
