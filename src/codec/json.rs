//! JSON and JSON Lines through `serde_json`.

use super::{child_path, item_path, Codec};
use crate::error::{Error, Result};
use crate::{EncodeOptions, Format, Value};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// JSON codec. Pretty-prints with `options.indent` spaces, or writes a single
/// line when the indent is `0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn format(&self) -> Format {
        Format::Json
    }

    fn encode(&self, value: &Value, options: &EncodeOptions) -> Result<String> {
        check_finite(value, "")?;
        if options.indent == 0 {
            return serde_json::to_string(value).map_err(|e| Error::encode(Format::Json, e));
        }

        let indent = vec![b' '; options.indent];
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        value
            .serialize(&mut serializer)
            .map_err(|e| Error::encode(Format::Json, e))?;
        String::from_utf8(buf).map_err(|e| Error::encode(Format::Json, e))
    }

    fn decode(&self, text: &str) -> Result<Value> {
        serde_json::from_str(text).map_err(|e| Error::decode(Format::Json, e))
    }

    fn encode_lines(&self, items: &[Value]) -> Result<String> {
        let mut out = String::new();
        for (i, item) in items.iter().enumerate() {
            check_finite(item, &item_path("", i))?;
            let line = serde_json::to_string(item).map_err(|e| Error::encode(Format::Json, e))?;
            out.push_str(&line);
            out.push('\n');
        }
        Ok(out)
    }

    fn decode_lines(&self, text: &str) -> Result<Value> {
        let mut items = Vec::new();
        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str(line) {
                Ok(item) => items.push(item),
                Err(e) => {
                    log::debug!("JSON Lines parse failed on line {}", number + 1);
                    return Err(Error::decode(Format::Json, e));
                }
            }
        }
        Ok(Value::Array(items))
    }
}

/// JSON has no NaN or infinity; `serde_json` would silently write `null`.
fn check_finite(value: &Value, path: &str) -> Result<()> {
    match value {
        Value::Number(n) if !n.is_finite() => Err(Error::unsupported(
            Format::Json,
            path,
            &format!("{n} is not a valid JSON number"),
        )),
        Value::Array(arr) => arr
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| check_finite(item, &item_path(path, i))),
        Value::Object(obj) => obj
            .iter()
            .try_for_each(|(key, item)| check_finite(item, &child_path(path, key))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_default_indent_is_four_spaces() {
        let json = JsonCodec
            .encode(&value!({"a": {"b": 1}}), &EncodeOptions::new())
            .unwrap();
        assert_eq!(json, "{\n    \"a\": {\n        \"b\": 1\n    }\n}");
    }

    #[test]
    fn test_zero_indent_is_compact() {
        let options = EncodeOptions::new().with_indent(0);
        let json = JsonCodec.encode(&value!({"a": [1, 2]}), &options).unwrap();
        assert_eq!(json, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_non_finite_float_rejected() {
        let mut data = value!({"scores": [1.5]});
        data["scores"].as_array_mut().unwrap().push(Value::from(f64::NAN));

        match JsonCodec.encode(&data, &EncodeOptions::new()).unwrap_err() {
            Error::Unsupported { path, .. } => assert_eq!(path, "scores[1]"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_lines_roundtrip() {
        let items = vec![value!({"name": "Mel Brooks"}), value!([1, 2]), value!(null)];
        let text = JsonCodec.encode_lines(&items).unwrap();
        assert_eq!(text, "{\"name\":\"Mel Brooks\"}\n[1,2]\nnull\n");
        assert_eq!(JsonCodec.decode_lines(&text).unwrap(), Value::Array(items));
    }

    #[test]
    fn test_lines_skip_blank_lines() {
        let value = JsonCodec.decode_lines("1\n\n   \n2\n").unwrap();
        assert_eq!(value, value!([1, 2]));
    }

    #[test]
    fn test_lines_bad_line_fails() {
        let err = JsonCodec.decode_lines("1\n{oops\n").unwrap_err();
        assert!(matches!(err, Error::Decode { format: Format::Json, .. }));
    }
}
