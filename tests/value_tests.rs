use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_box::{to_value, value, Map, Number, Value};

#[derive(Serialize)]
struct Movie {
    title: String,
    length: u32,
    imdb_stars: f32,
    sequel: Option<String>,
    stars: Vec<Star>,
}

#[derive(Serialize)]
struct Star {
    name: String,
    role: String,
}

#[test]
fn test_value_macro_scalars() {
    assert_eq!(value!(null), Value::Null);
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(-96), Value::Number(Number::Integer(-96)));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_nested() {
    let data = value!({
        "Spaceballs": {
            "Stars": [{"name": "Mel Brooks"}, {"name": "John Candy"}],
            "color": true
        }
    });

    let mut stars = Map::new();
    stars.insert("name".to_string(), Value::from("John Candy"));
    assert_eq!(data["Spaceballs"]["Stars"][1], Value::Object(stars));
    assert_eq!(data["Spaceballs"]["color"], true);
}

#[test]
fn test_struct_to_value() {
    let movie = Movie {
        title: "Spaceballs".to_string(),
        length: 96,
        imdb_stars: 7.5,
        sequel: None,
        stars: vec![Star {
            name: "Rick Moranis".to_string(),
            role: "Dark Helmet".to_string(),
        }],
    };

    let value = to_value(&movie).unwrap();
    assert_eq!(value["title"], "Spaceballs");
    assert_eq!(value["length"], 96);
    assert_eq!(value["imdb_stars"], 7.5);
    assert!(value["sequel"].is_null());
    assert_eq!(value["stars"][0]["role"], "Dark Helmet");

    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["title", "length", "imdb_stars", "sequel", "stars"]);
}

#[test]
fn test_mutation_through_index() {
    let mut data = value!({"movies": {}});
    data["movies"]["Spaceballs"]["length"] = Value::from(96);
    data["movies"]["Spaceballs"]["Stars"] = value!([]);
    data["movies"]["Spaceballs"]["Stars"]
        .as_array_mut()
        .unwrap()
        .push(value!({"name": "Bill Pullman"}));

    assert_eq!(data["movies"]["Spaceballs"]["Stars"][0]["name"], "Bill Pullman");
    assert_eq!(
        data.to_string(),
        r#"{"movies":{"Spaceballs":{"length":96,"Stars":[{"name":"Bill Pullman"}]}}}"#
    );
}

#[test]
fn test_string_keys_index() {
    let data = value!({"rating": "PG"});
    let key = String::from("rating");
    assert_eq!(data[&key], "PG");
    assert_eq!(data[key], "PG");
}
