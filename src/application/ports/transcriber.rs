//! Transcription port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::{TranscriptionRequest, TranscriptionResult};

/// Transcription errors. Every variant is terminal for the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptionError {
    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    #[error("Failed to write file data: wrote {written} of {expected} bytes")]
    Write { written: usize, expected: usize },

    #[error("Failed to send request: {0}")]
    Transport(String),

    #[error("API request failed with status code: {0}")]
    ApiStatus(u16),

    #[error("Empty response")]
    EmptyResponse,

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl TranscriptionError {
    /// HTTP status carried by an `ApiStatus` error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiStatus(code) => Some(*code),
            _ => None,
        }
    }
}

/// Port for audio transcription
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the audio file carried by the request.
    ///
    /// # Arguments
    /// * `request` - Audio file plus model, temperature, format and language
    ///
    /// # Returns
    /// The decoded result mapping or an error
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult, TranscriptionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_only_for_api_status() {
        assert_eq!(TranscriptionError::ApiStatus(429).status(), Some(429));
        assert_eq!(TranscriptionError::EmptyResponse.status(), None);
    }

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            TranscriptionError::ApiStatus(401).to_string(),
            "API request failed with status code: 401"
        );
        assert_eq!(
            TranscriptionError::Write {
                written: 3,
                expected: 10
            }
            .to_string(),
            "Failed to write file data: wrote 3 of 10 bytes"
        );
    }
}
