//! One encode/decode strategy per [`Format`].
//!
//! Each codec delegates the actual text handling to its format crate and is
//! only responsible for shaping [`Value`]s for it and wrapping its errors.

mod json;
mod toml;
mod yaml;

pub use self::json::JsonCodec;
pub use self::toml::TomlCodec;
pub use self::yaml::YamlCodec;

use crate::error::{Error, Result};
use crate::{EncodeOptions, Format, Value};

/// Text encoder/decoder for a single format.
pub trait Codec: Send + Sync {
    /// The format this codec handles.
    fn format(&self) -> Format;

    /// Encodes a whole value as one document.
    fn encode(&self, value: &Value, options: &EncodeOptions) -> Result<String>;

    /// Parses one document.
    fn decode(&self, text: &str) -> Result<Value>;

    /// Encodes each item as one line of output.
    fn encode_lines(&self, _items: &[Value]) -> Result<String> {
        Err(line_mode_unsupported(self.format()))
    }

    /// Parses every non-blank line as its own document.
    fn decode_lines(&self, _text: &str) -> Result<Value> {
        Err(line_mode_unsupported(self.format()))
    }
}

fn line_mode_unsupported(format: Format) -> Error {
    Error::Config(format!("multiline mode is only available for JSON, not {format}"))
}

/// Builds the display path of a child entry, e.g. `movies.Stars[0]`.
pub(crate) fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

pub(crate) fn item_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(child_path("", "movies"), "movies");
        assert_eq!(child_path("movies", "Spaceballs"), "movies.Spaceballs");
        assert_eq!(item_path("movies.Stars", 1), "movies.Stars[1]");
    }

    #[test]
    fn test_line_mode_rejected_outside_json() {
        for format in [Format::Toml, Format::Yaml] {
            let err = format.codec().decode_lines("a: 1").unwrap_err();
            assert!(matches!(err, Error::Config(_)));
            let err = format.codec().encode_lines(&[]).unwrap_err();
            assert!(matches!(err, Error::Config(_)));
        }
    }
}
