//! Options for encoding and decoding.
//!
//! - [`EncodeOptions`]: indentation, key sorting, JSON Lines, output file
//! - [`Source`]: where [`deserialize`](crate::deserialize) reads from
//! - [`Defaults`]: process-wide defaults, installed once at startup
//!
//! ## Examples
//!
//! ```rust
//! use serde_box::{serialize, value, EncodeOptions, Format};
//!
//! let data = value!({"b": 1, "a": [true]});
//!
//! let options = EncodeOptions::new().with_indent(2).with_sort_keys(true);
//! let json = serialize(Format::Json, &data, &options).unwrap();
//! assert_eq!(json, "{\n  \"a\": [\n    true\n  ],\n  \"b\": 1\n}");
//! ```

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Indentation used for JSON output unless configured otherwise.
pub const DEFAULT_JSON_INDENT: usize = 4;

static DEFAULTS: OnceLock<Defaults> = OnceLock::new();

/// Process-wide defaults for new [`EncodeOptions`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Defaults {
    pub json_indent: usize,
    pub sort_keys: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            json_indent: DEFAULT_JSON_INDENT,
            sort_keys: false,
        }
    }
}

/// Installs the process-wide defaults.
///
/// Call this once during startup, before any options are built. The defaults
/// cannot change afterwards.
///
/// # Errors
///
/// Returns [`Error::Config`] if defaults were already installed.
pub fn init_defaults(defaults: Defaults) -> Result<()> {
    DEFAULTS
        .set(defaults)
        .map_err(|_| Error::config("defaults are already initialized"))
}

/// Returns the installed defaults, or the built-in ones if none were installed.
#[must_use]
pub fn defaults() -> Defaults {
    DEFAULTS.get().cloned().unwrap_or_default()
}

/// Configuration for [`serialize`](crate::serialize).
///
/// # Examples
///
/// ```rust
/// use serde_box::EncodeOptions;
///
/// let options = EncodeOptions::new();
/// assert_eq!(options.indent, 4);
/// assert!(options.filename.is_none());
///
/// let options = EncodeOptions::new()
///     .with_indent(0)
///     .with_filename("out/movies.json");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EncodeOptions {
    /// JSON indentation width. `0` writes compact single-line JSON.
    /// TOML and YAML use their codec's fixed layout.
    pub indent: usize,
    /// Sort the keys of every object before encoding.
    pub sort_keys: bool,
    /// JSON only: write a top-level array as one compact document per line.
    pub multiline: bool,
    /// When set, the encoded text is also written to this path.
    pub filename: Option<PathBuf>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        let defaults = defaults();
        EncodeOptions {
            indent: defaults.json_indent,
            sort_keys: defaults.sort_keys,
            multiline: false,
            filename: None,
        }
    }
}

impl EncodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    #[must_use]
    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Also write the encoded text to `filename` (created or truncated).
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

/// Input for [`deserialize`](crate::deserialize).
///
/// Empty text and empty paths count as absent. When both a text and a
/// filename are present, the file is read and the text is ignored.
///
/// An empty *file* is still a source: its contents are parsed, so an empty
/// TOML file reads as an empty object while `Source::text("")` is rejected
/// with [`Error::NoSource`](crate::Error::NoSource).
///
/// # Examples
///
/// ```rust
/// use serde_box::Source;
///
/// let source = Source::text("length = 96");
/// assert!(!source.is_empty());
/// assert!(Source::default().is_empty());
/// assert!(Source::text("").is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Source {
    pub text: Option<String>,
    pub filename: Option<PathBuf>,
    /// JSON only: parse every non-blank line as its own document.
    pub multiline: bool,
}

impl Source {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A source holding the text to parse.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Source::new().with_text(text)
    }

    /// A source naming a UTF-8 file to read.
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Source::new().with_filename(path)
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_filename(mut self, path: impl Into<PathBuf>) -> Self {
        self.filename = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// The filename, if one was given and is non-empty.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.filename
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// `true` when there is neither a usable filename nor non-empty text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path().is_none() && self.text.as_deref().map_or(true, str::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_defaults() {
        let options = EncodeOptions::new();
        assert_eq!(options.indent, DEFAULT_JSON_INDENT);
        assert!(!options.sort_keys);
        assert!(!options.multiline);
        assert_eq!(options.filename, None);
    }

    #[test]
    fn test_encode_builder() {
        let options = EncodeOptions::new()
            .with_indent(2)
            .with_sort_keys(true)
            .with_multiline(true)
            .with_filename("movies.json");
        assert_eq!(options.indent, 2);
        assert!(options.sort_keys);
        assert!(options.multiline);
        assert_eq!(options.filename, Some(PathBuf::from("movies.json")));
    }

    #[test]
    fn test_source_emptiness() {
        assert!(Source::new().is_empty());
        assert!(Source::text("").is_empty());
        assert!(Source::file("").is_empty());
        assert!(Source::file("").with_text("").is_empty());
        assert!(!Source::file("movies.toml").is_empty());
        assert!(!Source::file("").with_text("a = 1").is_empty());
    }

    #[test]
    fn test_source_path_ignores_empty() {
        assert_eq!(Source::file("").path(), None);
        assert_eq!(
            Source::file("box.yaml").path(),
            Some(Path::new("box.yaml"))
        );
    }
}
