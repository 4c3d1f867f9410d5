//! Serialize and deserialize between [`Value`] and text, optionally via files.
//!
//! [`serialize`] and [`deserialize`] are the general entry points; the
//! `to_*` / `from_*` functions are shorthands for one format with default
//! options.
//!
//! Writing to a file never changes the returned text: when a filename is
//! given, the exact string that is returned is what lands on disk.

use crate::error::{Error, Result};
use crate::{Codec, EncodeOptions, Format, Source, Value};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Encodes `value` in `format`, writing the text to `options.filename` too
/// when one is set.
///
/// # Examples
///
/// ```rust
/// use serde_box::{serialize, value, EncodeOptions, Format};
///
/// let data = value!({"movies": {"Spaceballs": {"length": 96}}});
/// let toml = serialize(Format::Toml, &data, &EncodeOptions::new()).unwrap();
/// assert!(toml.starts_with("[movies.Spaceballs]"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Unsupported`] or [`Error::Encode`] when the value cannot
/// be written in this format, [`Error::Config`] for `multiline` outside JSON
/// or on a non-array value, and [`Error::Io`] when the file cannot be written.
/// On an encoding error the file is left untouched.
pub fn serialize(format: Format, value: &Value, options: &EncodeOptions) -> Result<String> {
    let codec = format.codec();
    let value = if options.sort_keys {
        Cow::Owned(value.sorted())
    } else {
        Cow::Borrowed(value)
    };

    let text = if options.multiline {
        match value.as_ref() {
            Value::Array(items) => codec.encode_lines(items)?,
            other => {
                return Err(Error::Config(format!(
                    "multiline output needs an array, found {}",
                    other.type_name()
                )))
            }
        }
    } else {
        codec.encode(&value, options)?
    };

    if let Some(path) = &options.filename {
        write_file(path, &text, format)?;
    }
    Ok(text)
}

/// Parses a [`Source`] as `format`.
///
/// The filename takes precedence over the text when both are set.
///
/// # Examples
///
/// ```rust
/// use serde_box::{deserialize, Error, Format, Source};
///
/// let value = deserialize(Format::Json, &Source::text(r#"{"length": 96}"#)).unwrap();
/// assert_eq!(value["length"], 96);
///
/// let err = deserialize(Format::Json, &Source::new()).unwrap_err();
/// assert!(matches!(err, Error::NoSource { .. }));
/// ```
///
/// # Errors
///
/// Returns [`Error::NoSource`] if the source is empty, [`Error::Io`] if the
/// file cannot be read as UTF-8 text, and [`Error::Decode`] if the text is not
/// valid for the format.
pub fn deserialize(format: Format, source: &Source) -> Result<Value> {
    if source.is_empty() {
        return Err(Error::NoSource { format });
    }

    let owned;
    let text = match source.path() {
        Some(path) => {
            if source.text.is_some() {
                log::trace!("both text and {} given, reading the file", path.display());
            }
            owned = read_file(path, format)?;
            owned.as_str()
        }
        None => source.text.as_deref().unwrap_or_default(),
    };

    decode_with(format.codec(), text, source.multiline)
}

fn decode_with(codec: &dyn Codec, text: &str, multiline: bool) -> Result<Value> {
    if multiline {
        codec.decode_lines(text)
    } else {
        codec.decode(text)
    }
}

fn write_file(path: &Path, text: &str, format: Format) -> Result<()> {
    fs::write(path, text).map_err(|e| Error::io(path, e))?;
    log::debug!("wrote {} bytes of {} to {}", text.len(), format, path.display());
    Ok(())
}

fn read_file(path: &Path, format: Format) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    log::debug!("read {} bytes of {} from {}", text.len(), format, path.display());
    Ok(text)
}

fn is_json_lines(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"))
}

/// Serializes to TOML.
///
/// An empty object encodes to an empty string. Passing that string back to
/// [`from_toml`] gives [`Error::NoSource`], since empty text counts as no
/// input; reading an empty file with [`from_toml_file`] gives an empty
/// object.
///
/// # Errors
///
/// Fails if the top level is not an object or the value contains `Null`.
pub fn to_toml(value: &Value) -> Result<String> {
    serialize(Format::Toml, value, &EncodeOptions::new())
}

/// Serializes to TOML and writes the same text to `path`.
pub fn to_toml_file(value: &Value, path: impl AsRef<Path>) -> Result<String> {
    serialize(
        Format::Toml,
        value,
        &EncodeOptions::new().with_filename(path.as_ref()),
    )
}

/// Serializes to JSON with the default indentation (4 spaces).
///
/// # Examples
///
/// ```rust
/// use serde_box::{to_json, value};
///
/// let json = to_json(&value!({"name": "Rick Moranis"})).unwrap();
/// assert_eq!(json, "{\n    \"name\": \"Rick Moranis\"\n}");
/// ```
pub fn to_json(value: &Value) -> Result<String> {
    serialize(Format::Json, value, &EncodeOptions::new())
}

/// Serializes to JSON and writes the same text to `path`.
pub fn to_json_file(value: &Value, path: impl AsRef<Path>) -> Result<String> {
    serialize(
        Format::Json,
        value,
        &EncodeOptions::new().with_filename(path.as_ref()),
    )
}

/// Serializes to block-style YAML.
pub fn to_yaml(value: &Value) -> Result<String> {
    serialize(Format::Yaml, value, &EncodeOptions::new())
}

/// Serializes to YAML and writes the same text to `path`.
pub fn to_yaml_file(value: &Value, path: impl AsRef<Path>) -> Result<String> {
    serialize(
        Format::Yaml,
        value,
        &EncodeOptions::new().with_filename(path.as_ref()),
    )
}

/// Parses TOML text.
///
/// # Examples
///
/// ```rust
/// use serde_box::from_toml;
///
/// let value = from_toml("[movies.Spaceballs]\nlength = 96\n").unwrap();
/// assert_eq!(value["movies"]["Spaceballs"]["length"], 96);
/// ```
pub fn from_toml(text: &str) -> Result<Value> {
    deserialize(Format::Toml, &Source::text(text))
}

/// Reads and parses a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Value> {
    deserialize(Format::Toml, &Source::file(path.as_ref()))
}

/// Parses JSON text.
pub fn from_json(text: &str) -> Result<Value> {
    deserialize(Format::Json, &Source::text(text))
}

/// Reads and parses a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Value> {
    deserialize(Format::Json, &Source::file(path.as_ref()))
}

/// Parses YAML text, resolving merge keys.
pub fn from_yaml(text: &str) -> Result<Value> {
    deserialize(Format::Yaml, &Source::text(text))
}

/// Reads and parses a YAML file.
pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Value> {
    deserialize(Format::Yaml, &Source::file(path.as_ref()))
}

/// Reads a file, choosing the format from its extension.
///
/// `.jsonl` files are read as JSON Lines. Files without a known extension
/// are tried as JSON, then YAML, then TOML; the first format that yields an
/// object or an array wins.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, [`Error::Decode`] if a
/// known extension's format fails to parse, and [`Error::UnknownFormat`] if no
/// format accepts a file with an unknown extension. Its message carries the
/// last decode error.
pub fn load(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    if let Some(format) = Format::from_path(path) {
        let source = Source::file(path).with_multiline(is_json_lines(path));
        return deserialize(format, &source);
    }

    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let mut last_error = None;
    for format in Format::ALL {
        match format.codec().decode(&text) {
            Ok(value) if value.is_object() || value.is_array() => {
                log::debug!("detected {} in {}", format, path.display());
                return Ok(value);
            }
            Ok(value) => log::trace!(
                "{} parsed as a {} {}, not a document",
                path.display(),
                format,
                value.type_name()
            ),
            Err(e) => {
                log::trace!("{} is not {}: {}", path.display(), format, e);
                last_error = Some(e);
            }
        }
    }

    let mut message = format!("{} is not valid JSON, YAML or TOML", path.display());
    if let Some(e) = last_error {
        message.push_str(&format!(" (last error: {e})"));
    }
    Err(Error::UnknownFormat(message))
}

/// Writes `value` to `path` in the format named by its extension.
///
/// Returns the text that was written.
///
/// # Errors
///
/// Returns [`Error::UnknownFormat`] when the extension is not recognised, and
/// otherwise fails like [`serialize`].
pub fn save(value: &Value, path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let format = Format::from_path(path)
        .ok_or_else(|| Error::UnknownFormat(format!("no format for {}", path.display())))?;
    let options = EncodeOptions::new()
        .with_multiline(is_json_lines(path))
        .with_filename(path);
    serialize(format, value, &options)
}
