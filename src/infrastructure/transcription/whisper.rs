//! Whisper-compatible transcription API adapter
//!
//! Talks to any OpenAI-style `audio/transcriptions` endpoint. Defaults to
//! Groq's hosted Whisper models.

use std::fmt;
use std::io::Write;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::config::DEFAULT_API_URL;
use crate::domain::transcription::{AudioFile, TranscriptionRequest, TranscriptionResult};

/// Content type of the uploaded file part
const FILE_MIME_TYPE: &str = "application/octet-stream";

/// Whisper API transcriber
#[derive(Clone)]
pub struct WhisperClient {
    api_key: String,
    api_url: String,
    client: reqwest::Client,
}

impl WhisperClient {
    /// Create a new client for the default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_http_client(api_key, reqwest::Client::new())
    }

    /// Create a new client for a custom endpoint
    pub fn with_api_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        let mut client = Self::new(api_key);
        client.set_api_url(api_url);
        client
    }

    /// Create a new client on top of a preconfigured HTTP client.
    ///
    /// Timeouts, proxies and TLS settings belong on `client`; this type adds none.
    pub fn with_http_client(api_key: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            client,
        }
    }

    /// Point subsequent calls at another endpoint
    pub fn set_api_url(&mut self, api_url: impl Into<String>) {
        self.api_url = api_url.into();
    }

    /// Endpoint the next call will hit
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Copy the audio into an owned buffer for the `file` part.
    ///
    /// A short write aborts the call instead of uploading a truncated file.
    fn file_part(file: &AudioFile) -> Result<Part, TranscriptionError> {
        let mut buffer = Vec::with_capacity(file.size_bytes());
        Self::copy_audio(&mut buffer, file.data())?;

        Part::bytes(buffer)
            .file_name(file.name().to_string())
            .mime_str(FILE_MIME_TYPE)
            .map_err(|e| TranscriptionError::RequestBuild(format!("failed to create form file: {e}")))
    }

    /// Single write of `data` into `sink`; fewer bytes accepted is a `Write` error
    fn copy_audio<W: Write>(sink: &mut W, data: &[u8]) -> Result<(), TranscriptionError> {
        let expected = data.len();
        let written = sink
            .write(data)
            .map_err(|e| TranscriptionError::RequestBuild(format!("failed to write file data: {e}")))?;

        if written != expected {
            return Err(TranscriptionError::Write { written, expected });
        }
        Ok(())
    }

    /// Build the multipart form: `file` first, then the text fields
    fn build_form(request: &TranscriptionRequest) -> Result<Form, TranscriptionError> {
        let mut form = Form::new().part("file", Self::file_part(&request.file)?);
        for (name, value) in request.text_fields() {
            form = form.text(name, value);
        }
        Ok(form)
    }

    /// Decode a successful body.
    ///
    /// A leading `{` means a JSON object; anything else is the bare text that
    /// `response_format=text` produces.
    fn decode_body(body: &[u8]) -> Result<TranscriptionResult, TranscriptionError> {
        match body.first() {
            None => Err(TranscriptionError::EmptyResponse),
            Some(b'{') => TranscriptionResult::from_json_slice(body)
                .map_err(|e| TranscriptionError::Decode(e.to_string())),
            Some(_) => Ok(TranscriptionResult::from_text(
                String::from_utf8_lossy(body).into_owned(),
            )),
        }
    }
}

impl fmt::Debug for WhisperClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhisperClient")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[async_trait]
impl Transcriber for WhisperClient {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult, TranscriptionError> {
        let form = Self::build_form(request)?;

        tracing::debug!(
            url = %self.api_url,
            file = %request.file.name(),
            bytes = request.file.size_bytes(),
            model = %request.model,
            temperature = %request.temperature_field(),
            response_format = %request.response_format,
            language = %request.language,
            "POST transcription (Authorization: Bearer <redacted>)"
        );

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    TranscriptionError::RequestBuild(e.to_string())
                } else {
                    TranscriptionError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(status = status.as_u16(), "Transcription API returned an error status");
            return Err(TranscriptionError::ApiStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TranscriptionError::Transport(format!("failed to read response: {e}")))?;

        tracing::debug!(bytes = body.len(), "Transcription API response received");

        Self::decode_body(&body)
    }
}
