//! Transcription result value object

use std::ops::Index;

use serde_json::{Map, Value};

/// Key under which the transcribed text is stored
pub const TEXT_KEY: &str = "text";

static NULL: Value = Value::Null;

/// Wire shape the result was decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// Bare text body, wrapped as `{"text": ...}`
    Text,
    /// JSON object body
    Json,
}

/// Result of one transcription call.
///
/// Providers attach their own fields next to `text` (Groq sends `x_groq`,
/// `verbose_json` adds `segments`), so the fields stay an open JSON map.
/// A plain-text body is normalized to a single `text` entry, which keeps
/// `result["text"]` valid whichever response format was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionResult {
    fields: Map<String, Value>,
    kind: PayloadKind,
}

impl TranscriptionResult {
    /// Wrap a plain-text body as `{"text": body}`
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(TEXT_KEY.to_string(), Value::String(text.into()));
        Self {
            fields,
            kind: PayloadKind::Text,
        }
    }

    /// Parse a JSON object body
    pub fn from_json_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let fields: Map<String, Value> = serde_json::from_slice(body)?;
        Ok(Self {
            fields,
            kind: PayloadKind::Json,
        })
    }

    /// Transcribed text, if the payload carried a string `text` field
    pub fn text(&self) -> Option<&str> {
        self.fields.get(TEXT_KEY).and_then(Value::as_str)
    }

    /// Look up any field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Every field other than `text`
    pub fn extra(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter().filter(|(key, _)| key.as_str() != TEXT_KEY)
    }

    /// All fields as received
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume and return the fields
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    pub fn kind(&self) -> PayloadKind {
        self.kind
    }

    pub fn is_plain_text(&self) -> bool {
        self.kind == PayloadKind::Text
    }
}

impl<'a> Index<&'a str> for TranscriptionResult {
    type Output = Value;

    /// Missing keys index to `Value::Null`, as with `serde_json::Value`
    fn index(&self, key: &'a str) -> &Value {
        self.fields.get(key).unwrap_or(&NULL)
    }
}
