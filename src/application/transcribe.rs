//! Transcribe file use case

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::transcription::{
    AudioFile, ResponseFormat, TranscriptionRequest, TranscriptionResult, DEFAULT_MODEL,
};

use super::ports::{Transcriber, TranscriptionError};

/// Errors from the transcribe use case
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("Failed to read audio file {}: {message}", .path.display())]
    ReadAudio { path: PathBuf, message: String },

    #[error("Audio file {} is empty", .0.display())]
    EmptyAudio(PathBuf),

    #[error("Audio path {} has no file name", .0.display())]
    InvalidPath(PathBuf),

    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),
}

/// Input parameters for the transcribe use case
#[derive(Debug, Clone)]
pub struct TranscribeInput {
    /// Audio file on disk
    pub path: PathBuf,
    /// Model identifier
    pub model: String,
    /// Sampling temperature, sent unvalidated
    pub temperature: f64,
    /// Requested body shape
    pub response_format: ResponseFormat,
    /// Language code, empty for auto-detect
    pub language: String,
}

impl TranscribeInput {
    /// Input with default model, zero temperature, JSON output and auto-detected language
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            response_format: ResponseFormat::default(),
            language: String::new(),
        }
    }
}

/// Output from the transcribe use case
#[derive(Debug, Clone)]
pub struct TranscribeOutput {
    /// Decoded API result
    pub result: TranscriptionResult,
    /// Audio file size in human-readable format
    pub audio_size: String,
}

/// Callbacks for status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct TranscribeCallbacks {
    /// Called after the file is read, with its human-readable size
    pub on_file_loaded: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called when the upload starts
    pub on_transcribing_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when the API call returns successfully
    pub on_transcribing_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// Reads an audio file from disk and transcribes it
pub struct TranscribeFileUseCase<T>
where
    T: Transcriber,
{
    transcriber: T,
}

impl<T> TranscribeFileUseCase<T>
where
    T: Transcriber,
{
    /// Create a new use case instance
    pub fn new(transcriber: T) -> Self {
        Self { transcriber }
    }

    /// Access the underlying transcriber
    pub fn transcriber(&self) -> &T {
        &self.transcriber
    }

    /// Execute the transcription workflow
    pub async fn execute(
        &self,
        input: TranscribeInput,
        callbacks: TranscribeCallbacks,
    ) -> Result<TranscribeOutput, TranscribeError> {
        let file = load_audio_file(&input.path).await?;
        let audio_size = file.human_readable_size();

        if let Some(ref cb) = callbacks.on_file_loaded {
            cb(&audio_size);
        }

        let request = TranscriptionRequest::new(file)
            .with_model(input.model)
            .with_temperature(input.temperature)
            .with_response_format(input.response_format.as_str())
            .with_language(input.language);

        if let Some(ref cb) = callbacks.on_transcribing_start {
            cb();
        }

        let result = match self.transcriber.transcribe(&request).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(file = %input.path.display(), error = %e, "Transcription failed");
                return Err(e.into());
            }
        };

        if let Some(ref cb) = callbacks.on_transcribing_end {
            cb();
        }

        Ok(TranscribeOutput { result, audio_size })
    }
}

/// Read an audio file and name it after the path's final component
pub async fn load_audio_file(path: &Path) -> Result<AudioFile, TranscribeError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| TranscribeError::InvalidPath(path.to_path_buf()))?;

    let data = tokio::fs::read(path)
        .await
        .map_err(|e| TranscribeError::ReadAudio {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if data.is_empty() {
        return Err(TranscribeError::EmptyAudio(path.to_path_buf()));
    }

    tracing::debug!(file = %name, bytes = data.len(), "Audio file loaded");
    Ok(AudioFile::new(data, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Records the last request and answers with a canned result
    struct MockTranscriber {
        response: Result<TranscriptionResult, TranscriptionError>,
        last_request: Mutex<Option<TranscriptionRequest>>,
    }

    impl MockTranscriber {
        fn returning(response: Result<TranscriptionResult, TranscriptionError>) -> Self {
            Self {
                response,
                last_request: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl Transcriber for MockTranscriber {
        async fn transcribe(
            &self,
            request: &TranscriptionRequest,
        ) -> Result<TranscriptionResult, TranscriptionError> {
            *self.last_request.lock().unwrap() = Some(request.clone());
            self.response.clone()
        }
    }

    fn write_audio(dir: &tempfile::TempDir, name: &str, data: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, data).unwrap();
        path
    }

    #[tokio::test]
    async fn builds_request_from_file_and_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_audio(&dir, "example.mp3", &[1, 2, 3]);
        let use_case = TranscribeFileUseCase::new(MockTranscriber::returning(Ok(
            TranscriptionResult::from_text("hello"),
        )));

        let input = TranscribeInput {
            model: "whisper-large-v3-turbo".to_string(),
            temperature: 0.1,
            response_format: ResponseFormat::Text,
            language: "en".to_string(),
            ..TranscribeInput::new(&path)
        };

        let output = use_case
            .execute(input, TranscribeCallbacks::default())
            .await
            .unwrap();

        assert_eq!(output.result.text(), Some("hello"));
        assert_eq!(output.audio_size, "3 B");

        let request = use_case
            .transcriber()
            .last_request
            .lock()
            .unwrap()
            .clone()
            .unwrap();
        assert_eq!(request.file.name(), "example.mp3");
        assert_eq!(request.file.data(), &[1, 2, 3]);
        assert_eq!(request.model, "whisper-large-v3-turbo");
        assert_eq!(request.temperature, 0.1);
        assert_eq!(request.response_format, "text");
        assert_eq!(request.language, "en");
    }

    #[tokio::test]
    async fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let use_case = TranscribeFileUseCase::new(MockTranscriber::returning(Ok(
            TranscriptionResult::from_text("unused"),
        )));

        let err = use_case
            .execute(
                TranscribeInput::new(dir.path().join("missing.mp3")),
                TranscribeCallbacks::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, TranscribeError::ReadAudio { .. }));
        assert!(use_case.transcriber().last_request.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_file_is_rejected_before_upload() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_audio(&dir, "silence.wav", &[]);
        let use_case = TranscribeFileUseCase::new(MockTranscriber::returning(Ok(
            TranscriptionResult::from_text("unused"),
        )));

        let err = use_case
            .execute(TranscribeInput::new(path), TranscribeCallbacks::default())
            .await
            .unwrap_err();

        assert!(matches!(err, TranscribeError::EmptyAudio(_)));
        assert!(use_case.transcriber().last_request.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn path_without_file_name_is_rejected() {
        let err = load_audio_file(Path::new("/")).await.unwrap_err();
        assert!(matches!(err, TranscribeError::InvalidPath(_)));
    }

    #[tokio::test]
    async fn transcriber_error_is_propagated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_audio(&dir, "a.mp3", &[9]);
        let use_case = TranscribeFileUseCase::new(MockTranscriber::returning(Err(
            TranscriptionError::ApiStatus(429),
        )));

        let err = use_case
            .execute(TranscribeInput::new(path), TranscribeCallbacks::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TranscribeError::Transcription(TranscriptionError::ApiStatus(429))
        ));
    }

    #[tokio::test]
    async fn callbacks_fire_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_audio(&dir, "a.mp3", &[1, 2]);
        let use_case = TranscribeFileUseCase::new(MockTranscriber::returning(Ok(
            TranscriptionResult::from_text("ok"),
        )));

        let calls = Arc::new(AtomicUsize::new(0));
        let loaded = Arc::clone(&calls);
        let started = Arc::clone(&calls);
        let ended = Arc::clone(&calls);

        let callbacks = TranscribeCallbacks {
            on_file_loaded: Some(Box::new(move |size: &str| {
                assert_eq!(size, "2 B");
                assert_eq!(loaded.fetch_add(1, Ordering::SeqCst), 0);
            })),
            on_transcribing_start: Some(Box::new(move || {
                assert_eq!(started.fetch_add(1, Ordering::SeqCst), 1);
            })),
            on_transcribing_end: Some(Box::new(move || {
                assert_eq!(ended.fetch_add(1, Ordering::SeqCst), 2);
            })),
        };

        use_case
            .execute(TranscribeInput::new(path), callbacks)
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
