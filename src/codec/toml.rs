//! TOML through the `toml` crate.
//!
//! Values are converted to `toml::Value` first so that anything TOML cannot
//! hold (null, a non-table document root) is reported with its key path
//! instead of a bare codec message.

use super::{child_path, item_path, Codec};
use crate::error::{Error, Result};
use crate::{EncodeOptions, Format, Map, Number, Value};

/// TOML codec. Nested objects become `[a.b]` tables and arrays of objects
/// become `[[a.b]]` arrays of tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct TomlCodec;

impl Codec for TomlCodec {
    fn format(&self) -> Format {
        Format::Toml
    }

    fn encode(&self, value: &Value, _options: &EncodeOptions) -> Result<String> {
        let root = match value {
            Value::Object(obj) => encode_table(obj, "")?,
            other => {
                return Err(Error::unsupported(
                    Format::Toml,
                    "",
                    &format!("document root must be a table, found {}", other.type_name()),
                ))
            }
        };
        toml::to_string(&root).map_err(|e| Error::encode(Format::Toml, e))
    }

    fn decode(&self, text: &str) -> Result<Value> {
        let table: toml::Table = toml::from_str(text).map_err(|e| Error::decode(Format::Toml, e))?;
        Ok(Value::Object(decode_table(table)))
    }
}

fn encode_table(obj: &Map, path: &str) -> Result<toml::Table> {
    let mut table = toml::Table::new();
    for (key, value) in obj.iter() {
        let key_path = child_path(path, key);
        table.insert(key.clone(), encode_value(value, &key_path)?);
    }
    Ok(table)
}

fn encode_value(value: &Value, path: &str) -> Result<toml::Value> {
    Ok(match value {
        Value::Null => {
            return Err(Error::unsupported(
                Format::Toml,
                path,
                "null has no TOML representation",
            ))
        }
        Value::Bool(b) => toml::Value::Boolean(*b),
        Value::Number(Number::Integer(i)) => toml::Value::Integer(*i),
        Value::Number(Number::Float(f)) => toml::Value::Float(*f),
        Value::String(s) => toml::Value::String(s.clone()),
        Value::Array(arr) => toml::Value::Array(
            arr.iter()
                .enumerate()
                .map(|(i, item)| encode_value(item, &item_path(path, i)))
                .collect::<Result<_>>()?,
        ),
        Value::Object(obj) => toml::Value::Table(encode_table(obj, path)?),
    })
}

fn decode_table(table: toml::Table) -> Map {
    table
        .into_iter()
        .map(|(key, value)| (key, decode_value(value)))
        .collect()
}

// Datetimes have no Value counterpart and come back as their RFC 3339 text.
fn decode_value(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(Number::Integer(i)),
        toml::Value::Float(f) => Value::Number(Number::Float(f)),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(decode_value).collect()),
        toml::Value::Table(table) => Value::Object(decode_table(table)),
    }
}
