//! Transcription API adapters

mod whisper;

pub use whisper::WhisperClient;
