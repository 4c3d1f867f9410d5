mod common;

use common::{movie_data, TOML_STRING};
use pretty_assertions::assert_eq;
use serde_box::{
    deserialize, from_json, from_toml, from_yaml, serialize, to_json, to_toml, to_yaml, value,
    EncodeOptions, Error, Format, Source, Value,
};
use std::error::Error as _;

#[test]
fn test_to_toml() {
    let formatted = to_toml(&movie_data()).unwrap();
    println!("Movies TOML:\n{}", formatted);
    assert!(formatted.starts_with("[movies.Spaceballs]"));
    assert!(formatted.contains("[[movies.Spaceballs.Stars]]"));
    assert!(formatted.contains("Robin Hood: Men in Tights"));
}

#[test]
fn test_from_toml() {
    let result = from_toml(TOML_STRING).unwrap();
    assert_eq!(result["movies"]["Spaceballs"]["length"], 96);
    assert_eq!(result["movies"]["Spaceballs"]["imdb_stars"], 7.1);
    assert_eq!(result["movies"]["Spaceballs"]["Stars"][1]["role"], "Barf");
}

#[test]
fn test_bad_from_toml() {
    let err = deserialize(Format::Toml, &Source::new()).unwrap_err();
    assert!(matches!(err, Error::NoSource { format: Format::Toml }));
}

#[test]
fn test_malformed_input_keeps_codec_error() {
    let err = from_toml("[movies.Spaceballs\nlength = 96").unwrap_err();
    assert!(matches!(err, Error::Decode { format: Format::Toml, .. }));
    assert!(err
        .source()
        .and_then(|s| s.downcast_ref::<toml::de::Error>())
        .is_some());

    let err = from_json("{\"length\": }").unwrap_err();
    let source = err.source().unwrap();
    assert!(source.downcast_ref::<serde_json::Error>().is_some());
    assert!(err.to_string().contains(&source.to_string()));

    let err = from_yaml("movies: [Spaceballs").unwrap_err();
    assert!(err
        .source()
        .and_then(|s| s.downcast_ref::<serde_yaml::Error>())
        .is_some());
}

#[test]
fn test_to_json() {
    let movie_string = to_json(&movie_data()).unwrap();
    assert!(movie_string.contains("\"Rick Moranis\""));
    assert!(movie_string.starts_with("{\n    \"movies\": {\n        \"Spaceballs\""));

    let parsed: serde_json::Value = serde_json::from_str(&movie_string).unwrap();
    assert_eq!(parsed["movies"]["Spaceballs"]["length"], 96);
}

#[test]
fn test_to_yaml() {
    let movie_string = to_yaml(&movie_data()).unwrap();
    assert!(movie_string.contains("Rick Moranis"));

    let parsed: serde_yaml::Value = serde_yaml::from_str(&movie_string).unwrap();
    assert_eq!(parsed["movies"]["Spaceballs"]["Director"], "Mel Brooks");
}

#[test]
fn test_roundtrip_every_format() {
    let data = movie_data();
    for format in Format::ALL {
        let text = serialize(format, &data, &EncodeOptions::new()).unwrap();
        let back = deserialize(format, &Source::text(text)).unwrap();
        assert_eq!(back, data, "{} round-trip", format);
    }
}

#[test]
fn test_roundtrip_preserves_key_order() {
    let data = movie_data();
    for format in Format::ALL {
        let text = serialize(format, &data, &EncodeOptions::new()).unwrap();
        let back = deserialize(format, &Source::text(text)).unwrap();
        let keys: Vec<_> = back["movies"]["Spaceballs"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(
            keys,
            vec!["imdb_stars", "rating", "length", "Director", "Stars"],
            "{} key order",
            format
        );
    }
}

#[test]
fn test_toml_rejects_null() {
    let data = value!({"movies": {"Spaceballs": {"sequel": null}}});
    match to_toml(&data).unwrap_err() {
        Error::Unsupported { format, path, .. } => {
            assert_eq!(format, Format::Toml);
            assert_eq!(path, "movies.Spaceballs.sequel");
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // JSON and YAML carry null fine
    assert!(to_json(&data).unwrap().contains("null"));
    assert_eq!(from_yaml(&to_yaml(&data).unwrap()).unwrap(), data);
}

#[test]
fn test_json_and_yaml_accept_top_level_arrays() {
    let data = value!([{"name": "Mel Brooks"}, 96, "PG", true, null]);
    assert_eq!(from_json(&to_json(&data).unwrap()).unwrap(), data);
    assert_eq!(from_yaml(&to_yaml(&data).unwrap()).unwrap(), data);
    assert!(matches!(to_toml(&data), Err(Error::Unsupported { .. })));
}

#[test]
fn test_custom_indent() {
    let data = value!({"movies": ["Spaceballs"]});
    let options = EncodeOptions::new().with_indent(2);
    let json = serialize(Format::Json, &data, &options).unwrap();
    assert_eq!(json, "{\n  \"movies\": [\n    \"Spaceballs\"\n  ]\n}");
}

#[test]
fn test_json_lines() {
    let data = value!([{"name": "Mel Brooks"}, {"name": "John Candy"}]);
    let options = EncodeOptions::new().with_multiline(true);
    let text = serialize(Format::Json, &data, &options).unwrap();
    assert_eq!(text.lines().count(), 2);

    let back = deserialize(Format::Json, &Source::text(text).with_multiline(true)).unwrap();
    assert_eq!(back, data);
}

#[test]
fn test_json_string_and_parsed_equivalence() {
    let first = to_json(&movie_data()).unwrap();
    let second = serialize(
        Format::Json,
        &movie_data(),
        &EncodeOptions::new().with_indent(0),
    )
    .unwrap();
    assert_ne!(first, second);

    let a: serde_json::Value = serde_json::from_str(&first).unwrap();
    let b: serde_json::Value = serde_json::from_str(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_value_from_yaml_types() {
    let value: Value = from_yaml("length: 96\nrating: PG\nstars: [Mel, John]\n").unwrap();
    assert_eq!(value["length"], 96);
    assert_eq!(value["stars"][1], "John");
}

#[test]
fn test_empty_table_toml_text_reads_as_no_source() {
    let text = to_toml(&value!({})).unwrap();
    assert_eq!(text, "");
    assert!(matches!(
        from_toml(&text),
        Err(Error::NoSource { format: Format::Toml })
    ));

    // a single entry is enough to read back
    let data = value!({"sequel": false});
    assert_eq!(from_toml(&to_toml(&data).unwrap()).unwrap(), data);
}

#[test]
fn test_yaml_merge_keys() {
    let yaml = "defaults: &defaults\n  rating: PG\n  color: true\n\
                Spaceballs:\n  <<: *defaults\n  length: 96\n";
    let value = from_yaml(yaml).unwrap();
    assert_eq!(
        value["Spaceballs"],
        value!({"length": 96, "rating": "PG", "color": true})
    );
}
