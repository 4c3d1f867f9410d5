//! The set of supported text formats.
//!
//! [`Format`] selects the codec used by [`serialize`](crate::serialize) and
//! [`deserialize`](crate::deserialize). Each variant maps to exactly one
//! [`Codec`] strategy.
//!
//! ```rust
//! use serde_box::Format;
//! use std::path::Path;
//!
//! assert_eq!("yml".parse::<Format>().unwrap(), Format::Yaml);
//! assert_eq!(Format::from_path(Path::new("movies.tml")), Some(Format::Toml));
//! assert_eq!(Format::Json.extension(), "json");
//! ```

use crate::codec::{Codec, JsonCodec, TomlCodec, YamlCodec};
use crate::Error;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A textual serialization format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// All formats, in the order [`load`](crate::load) tries them for files
    /// without a recognised extension.
    pub const ALL: [Format; 3] = [Format::Json, Format::Yaml, Format::Toml];

    /// Returns the codec strategy for this format.
    #[must_use]
    pub fn codec(self) -> &'static dyn Codec {
        match self {
            Format::Toml => &TomlCodec,
            Format::Json => &JsonCodec,
            Format::Yaml => &YamlCodec,
        }
    }

    /// Returns the display name, e.g. `"TOML"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Format::Toml => "TOML",
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        }
    }

    /// Returns the conventional file extension, without a dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Format::Toml => "toml",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// Guesses the format from a file extension (case-insensitive).
    ///
    /// `.jsonl` is treated as JSON; callers decide whether to read it as
    /// JSON Lines.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" | "tml" => Some(Format::Toml),
            "json" | "jsonl" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toml" | "tml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}
