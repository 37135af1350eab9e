//! Audio file value object

/// Value object representing an audio file ready for upload.
/// Contains the raw audio bytes and the file name reported in the upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    data: Vec<u8>,
    name: String,
}

impl AudioFile {
    /// Create an AudioFile from raw bytes
    pub fn new(data: Vec<u8>, name: impl Into<String>) -> Self {
        Self {
            data,
            name: name.into(),
        }
    }

    /// Create an AudioFile from a byte slice
    pub fn from_bytes(data: &[u8], name: impl Into<String>) -> Self {
        Self {
            data: data.to_vec(),
            name: name.into(),
        }
    }

    /// Get the raw audio data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw audio data
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the file name used as multipart filename metadata
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Whether the file holds no audio bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
