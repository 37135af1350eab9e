//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the transcription HTTP API and the config file.

pub mod config;
pub mod transcription;

// Re-export adapters
pub use config::XdgConfigStore;
pub use transcription::WhisperClient;
