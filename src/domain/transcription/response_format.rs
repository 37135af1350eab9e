//! Response format value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidResponseFormatError;

/// All response formats understood by the transcription endpoint
pub const ALL_RESPONSE_FORMATS: &[ResponseFormat] = &[
    ResponseFormat::Json,
    ResponseFormat::Text,
    ResponseFormat::VerboseJson,
];

/// Shape of the body the API sends back.
///
/// `Text` yields a bare text body; the JSON formats yield an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Text,
    VerboseJson,
}

impl ResponseFormat {
    /// Get the wire value sent in the `response_format` form field
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::VerboseJson => "verbose_json",
        }
    }
}

impl FromStr for ResponseFormat {
    type Err = InvalidResponseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "verbose_json" | "verbose-json" => Ok(Self::VerboseJson),
            _ => Err(InvalidResponseFormatError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_formats() {
        assert_eq!("json".parse::<ResponseFormat>().unwrap(), ResponseFormat::Json);
        assert_eq!("text".parse::<ResponseFormat>().unwrap(), ResponseFormat::Text);
        assert_eq!(
            "verbose_json".parse::<ResponseFormat>().unwrap(),
            ResponseFormat::VerboseJson
        );
    }

    #[test]
    fn parse_case_insensitive_and_trimmed() {
        assert_eq!("TEXT".parse::<ResponseFormat>().unwrap(), ResponseFormat::Text);
        assert_eq!("  Json ".parse::<ResponseFormat>().unwrap(), ResponseFormat::Json);
        assert_eq!(
            "verbose-json".parse::<ResponseFormat>().unwrap(),
            ResponseFormat::VerboseJson
        );
    }

    #[test]
    fn parse_invalid() {
        assert!("srt".parse::<ResponseFormat>().is_err());
        assert!("".parse::<ResponseFormat>().is_err());
    }

    #[test]
    fn display_matches_wire_value() {
        for format in ALL_RESPONSE_FORMATS {
            assert_eq!(format.to_string(), format.as_str());
        }
        assert_eq!(ResponseFormat::VerboseJson.to_string(), "verbose_json");
    }

    #[test]
    fn default_is_json() {
        assert_eq!(ResponseFormat::default(), ResponseFormat::Json);
    }
}
