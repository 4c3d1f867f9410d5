//! Error types for format conversion.
//!
//! Every failure in this crate surfaces as a single [`Error`] type so callers
//! can handle one error kind regardless of format or source.
//!
//! ## Error Categories
//!
//! - **Missing input**: [`Error::NoSource`] when there is nothing to parse
//! - **Codec failures**: [`Error::Decode`] / [`Error::Encode`], wrapping the
//!   underlying `toml`, `serde_json` or `serde_yaml` error as the `source()`
//! - **Unrepresentable values**: [`Error::Unsupported`] with the key path
//! - **I/O Errors**: [`Error::Io`] with the offending path
//!
//! ## Examples
//!
//! ```rust
//! use serde_box::{from_json, Error};
//! use std::error::Error as _;
//!
//! let err = from_json("{ not json").unwrap_err();
//! assert!(matches!(err, Error::Decode { .. }));
//! assert!(err.source().is_some());
//! ```

use crate::Format;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed codec error, kept as the `source()` of decode/encode failures.
pub type CodecError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Represents all possible errors raised by the format bridge.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither source text nor a filename was supplied
    #[error("no {format} data to parse: provide a string or a filename")]
    NoSource { format: Format },

    /// The input text is not valid for the format
    #[error("invalid {format}: {source}")]
    Decode {
        format: Format,
        #[source]
        source: CodecError,
    },

    /// The codec refused to encode the value
    #[error("cannot encode {format}: {source}")]
    Encode {
        format: Format,
        #[source]
        source: CodecError,
    },

    /// The value holds something the target format cannot represent
    #[error("cannot encode {format} at `{path}`: {reason}")]
    Unsupported {
        format: Format,
        path: String,
        reason: String,
    },

    /// Reading or writing a file failed
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A format name or file extension could not be resolved
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    /// Invalid option combination or repeated initialisation
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Wraps a codec parse error.
    pub fn decode<E>(format: Format, source: E) -> Self
    where
        E: Into<CodecError>,
    {
        Error::Decode {
            format,
            source: source.into(),
        }
    }

    /// Wraps a codec encode error.
    pub fn encode<E>(format: Format, source: E) -> Self
    where
        E: Into<CodecError>,
    {
        Error::Encode {
            format,
            source: source.into(),
        }
    }

    /// Creates an unsupported-value error for the value found at `path`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_box::{Error, Format};
    ///
    /// let err = Error::unsupported(Format::Toml, "movies.rating", "null has no TOML form");
    /// assert!(err.to_string().contains("movies.rating"));
    /// ```
    pub fn unsupported(format: Format, path: &str, reason: &str) -> Self {
        Error::Unsupported {
            format,
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Attaches a path to an I/O failure.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a configuration error.
    pub fn config(msg: &str) -> Self {
        Error::Config(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// The format involved in the failure, if any.
    #[must_use]
    pub fn format(&self) -> Option<Format> {
        match self {
            Error::NoSource { format }
            | Error::Decode { format, .. }
            | Error::Encode { format, .. }
            | Error::Unsupported { format, .. } => Some(*format),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
