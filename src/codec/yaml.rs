//! YAML through `serde_yaml`.
//!
//! Decoding only ever produces plain [`Value`]s: tagged nodes are rejected,
//! so no application types are constructed from input. Merge keys (`<<`) are
//! resolved before conversion.

use super::Codec;
use crate::error::{Error, Result};
use crate::{EncodeOptions, Format, Map, Value};

/// YAML codec using block style throughout.
#[derive(Clone, Copy, Debug, Default)]
pub struct YamlCodec;

impl Codec for YamlCodec {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn encode(&self, value: &Value, _options: &EncodeOptions) -> Result<String> {
        serde_yaml::to_string(value).map_err(|e| Error::encode(Format::Yaml, e))
    }

    fn decode(&self, text: &str) -> Result<Value> {
        let mut node: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| Error::decode(Format::Yaml, e))?;
        node.apply_merge().map_err(|e| Error::decode(Format::Yaml, e))?;
        decode_value(node)
    }
}

fn decode_value(node: serde_yaml::Value) -> Result<Value> {
    Ok(match node {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => decode_number(&n),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Value::Array(seq.into_iter().map(decode_value).collect::<Result<_>>()?)
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(decode_key(key)?, decode_value(value)?);
            }
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => {
            return Err(Error::decode(
                Format::Yaml,
                format!("tagged node {} is not supported", tagged.tag),
            ))
        }
    })
}

fn decode_number(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::from(i)
    } else if let Some(u) = n.as_u64() {
        Value::from(u)
    } else {
        Value::from(n.as_f64().unwrap_or(f64::NAN))
    }
}

// Scalar keys are kept as their text, e.g. `1: a` becomes `{"1": "a"}`.
fn decode_key(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::decode(
            Format::Yaml,
            format!("mapping keys must be strings, numbers or booleans, found {other:?}"),
        )),
    }
}
