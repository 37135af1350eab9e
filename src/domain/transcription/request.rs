//! Transcription request value object

use super::audio_file::AudioFile;
use super::response_format::ResponseFormat;

/// Model used when the caller does not pick one
pub const DEFAULT_MODEL: &str = "whisper-large-v3";

/// Everything one transcription call sends to the API.
///
/// Fields are passed through verbatim; the temperature is not range-checked
/// and an empty language lets the service auto-detect.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionRequest {
    pub file: AudioFile,
    pub model: String,
    pub temperature: f64,
    pub response_format: String,
    pub language: String,
}

impl TranscriptionRequest {
    /// Create a request with default model, zero temperature, JSON output and
    /// language auto-detection
    pub fn new(file: AudioFile) -> Self {
        Self {
            file,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            response_format: ResponseFormat::default().as_str().to_string(),
            language: String::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_response_format(mut self, format: impl Into<String>) -> Self {
        self.response_format = format.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Temperature in six-digit fixed notation, e.g. `0.100000`
    pub fn temperature_field(&self) -> String {
        format!("{:.6}", self.temperature)
    }

    /// Text form fields in wire order. The file part always precedes them.
    pub fn text_fields(&self) -> [(&'static str, String); 4] {
        [
            ("model", self.model.clone()),
            ("temperature", self.temperature_field()),
            ("response_format", self.response_format.clone()),
            ("language", self.language.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file() -> AudioFile {
        AudioFile::new(vec![1, 2, 3], "clip.mp3")
    }

    #[test]
    fn new_uses_defaults() {
        let request = TranscriptionRequest::new(file());
        assert_eq!(request.model, "whisper-large-v3");
        assert_eq!(request.temperature, 0.0);
        assert_eq!(request.response_format, "json");
        assert!(request.language.is_empty());
    }

    #[test]
    fn temperature_is_fixed_point() {
        let request = TranscriptionRequest::new(file()).with_temperature(0.1);
        assert_eq!(request.temperature_field(), "0.100000");

        let request = TranscriptionRequest::new(file()).with_temperature(1.0);
        assert_eq!(request.temperature_field(), "1.000000");
    }

    #[test]
    fn temperature_is_not_validated() {
        let request = TranscriptionRequest::new(file()).with_temperature(-2.5);
        assert_eq!(request.temperature_field(), "-2.500000");
    }

    #[test]
    fn text_fields_are_in_wire_order() {
        let request = TranscriptionRequest::new(file())
            .with_model("whisper-large-v3-turbo")
            .with_temperature(0.25)
            .with_response_format("text")
            .with_language("en");

        let fields = request.text_fields();
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["model", "temperature", "response_format", "language"]);
        assert_eq!(fields[0].1, "whisper-large-v3-turbo");
        assert_eq!(fields[1].1, "0.250000");
        assert_eq!(fields[2].1, "text");
        assert_eq!(fields[3].1, "en");
    }
}
