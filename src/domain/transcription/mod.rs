//! Transcription domain module

mod audio_file;
mod request;
mod response_format;
mod result;

pub use audio_file::AudioFile;
pub use request::{TranscriptionRequest, DEFAULT_MODEL};
pub use response_format::{ResponseFormat, ALL_RESPONSE_FORMATS};
pub use result::{PayloadKind, TranscriptionResult, TEXT_KEY};
